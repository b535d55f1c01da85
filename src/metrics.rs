use crate::error::OverlayError;
use crate::units::Pt;

/// Measures how wide a run of text renders at a given font size. The font itself is
/// bound to the implementor; layout only ever asks about the one font it was given.
///
/// Widths are summed linearly: no kerning, no shaping.
pub trait TextMetrics {
    /// Width of `text` at `size`, in the same units as the page canvas
    fn width_of_text(&self, text: &str, size: Pt) -> Result<Pt, OverlayError>;
}

/// Maps characters to glyph ids for the `Identity-H` encoding used when rendering
pub trait GlyphEncoder {
    fn glyph_id(&self, ch: char) -> Option<u16>;
}

impl<M: TextMetrics + ?Sized> TextMetrics for &M {
    fn width_of_text(&self, text: &str, size: Pt) -> Result<Pt, OverlayError> {
        (**self).width_of_text(text, size)
    }
}

impl<G: GlyphEncoder + ?Sized> GlyphEncoder for &G {
    fn glyph_id(&self, ch: char) -> Option<u16> {
        (**self).glyph_id(ch)
    }
}

/// Metrics for an idealised fixed-pitch font where every character advances by the
/// same width, regardless of font size. Useful for previews and for reasoning about
/// layouts without a font file at hand.
///
/// ```
/// use pdf_overlay::{FixedAdvance, Pt, TextMetrics};
///
/// let metrics = FixedAdvance(Pt(10.0));
/// assert_eq!(metrics.width_of_text("Name", Pt(12.0)).unwrap(), Pt(40.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedAdvance(pub Pt);

impl TextMetrics for FixedAdvance {
    fn width_of_text(&self, text: &str, _size: Pt) -> Result<Pt, OverlayError> {
        Ok(self.0 * text.chars().count() as f32)
    }
}

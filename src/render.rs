//! Turns placed text into PDF content stream operators.

use crate::error::OverlayError;
use crate::font::RESOURCE_NAME;
use crate::metrics::GlyphEncoder;
use crate::placed::PlacedText;
use crate::units::Pt;
use std::collections::BTreeMap;
use std::io::Write;

/// Renders placed text to a PDF content stream that can be appended to a page's
/// existing content. The whole stream is wrapped in `q`/`Q` so it leaves the graphics
/// state of the page exactly as it found it.
///
/// Every run is painted in fill mode with the font registered as `/F0`. Emphasized
/// runs set a thinner line width first, which has no visible effect on filled text;
/// emphasis is carried through to the stream but not distinguished on the page.
#[allow(clippy::write_with_newline)]
pub fn content_stream<G: GlyphEncoder + ?Sized>(
    placed: &[PlacedText],
    encoder: &G,
) -> Result<Vec<u8>, OverlayError> {
    if placed.is_empty() {
        return Ok(Vec::default());
    }

    let mut content: Vec<u8> = Vec::default();
    write!(content, "q\n")?;
    write!(content, "0 Tr\n")?;

    let mut current_size: Option<Pt> = None;
    let mut current_emphasis: Option<bool> = None;

    for text in placed {
        if current_size != Some(text.font_size) {
            current_size = Some(text.font_size);
            write!(content, "/{RESOURCE_NAME} {} Tf\n", text.font_size.0)?;
        }
        if current_emphasis != Some(text.emphasis) {
            current_emphasis = Some(text.emphasis);
            let line_width = if text.emphasis { 0.5 } else { 1.0 };
            write!(content, "{line_width} w\n")?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", text.x.0, text.y.0)?;
        write!(content, "<")?;
        for ch in text.content.chars() {
            let gid = encoder
                .glyph_id(ch)
                .ok_or(OverlayError::MissingGlyph { ch })?;
            write!(content, "{gid:04x}")?;
        }
        write!(content, "> Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(content)
}

/// Every glyph the placed text paints, keyed by glyph id, along with the character it
/// was chosen for. The embedded font only describes these glyphs.
pub(crate) fn used_glyphs<G: GlyphEncoder + ?Sized>(
    placed: &[PlacedText],
    encoder: &G,
) -> Result<BTreeMap<u16, char>, OverlayError> {
    let mut glyphs = BTreeMap::new();
    for ch in placed.iter().flat_map(|text| text.content.chars()) {
        let gid = encoder
            .glyph_id(ch)
            .ok_or(OverlayError::MissingGlyph { ch })?;
        glyphs.entry(gid).or_insert(ch);
    }
    Ok(glyphs)
}

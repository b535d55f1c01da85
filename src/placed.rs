use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// A single run of text at an absolute position on the page, ready to be painted.
///
/// `x` and `y` locate the start of the baseline, in page coordinates with the
/// origin at the bottom-left. `emphasis` is advisory: the renderer accepts it but
/// paints emphasized text the same way as regular text.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PlacedText {
    pub content: String,
    pub x: Pt,
    pub y: Pt,
    pub font_size: Pt,
    #[serde(default)]
    pub emphasis: bool,
}

impl PlacedText {
    pub fn new<S: Into<String>>(content: S, x: Pt, y: Pt, font_size: Pt, emphasis: bool) -> Self {
        PlacedText {
            content: content.into(),
            x,
            y,
            font_size,
            emphasis,
        }
    }

    pub fn coords(&self) -> (Pt, Pt) {
        (self.x, self.y)
    }
}

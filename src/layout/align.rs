use super::Layout;
use crate::error::OverlayError;
use crate::metrics::TextMetrics;
use crate::placed::PlacedText;
use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// A single line of text to be aligned against the page, typically read from a job
/// description such as `{"align": "center", "text": "Invoice", "font_size": 18, "y": 780}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "align", rename_all = "snake_case")]
pub enum TextRequest {
    /// Centre the text horizontally on the page
    Center {
        text: String,
        font_size: Pt,
        y: Pt,
        #[serde(default)]
        emphasis: bool,
    },
    /// End the text `right_margin` points from the right edge of the page
    Right {
        text: String,
        font_size: Pt,
        right_margin: Pt,
        y: Pt,
        #[serde(default)]
        emphasis: bool,
    },
}

impl<M: TextMetrics + ?Sized> Layout<'_, M> {
    /// Place `text` centred horizontally on the page, with its baseline at `y`
    pub fn align_center(
        &self,
        font_size: Pt,
        text: &str,
        y: Pt,
        emphasis: bool,
    ) -> Result<PlacedText, OverlayError> {
        let width = self.metrics.width_of_text(text, font_size)?;
        let x = (self.canvas.width - width) / 2.0;
        Ok(PlacedText::new(text, x, y, font_size, emphasis))
    }

    /// Place `text` so that it ends `right_margin` points from the right edge of the page
    pub fn align_right(
        &self,
        font_size: Pt,
        text: &str,
        right_margin: Pt,
        y: Pt,
        emphasis: bool,
    ) -> Result<PlacedText, OverlayError> {
        let width = self.metrics.width_of_text(text, font_size)?;
        let x = self.canvas.width - width - right_margin;
        Ok(PlacedText::new(text, x, y, font_size, emphasis))
    }

    /// Place a single request with the matching alignment primitive
    pub fn place(&self, request: &TextRequest) -> Result<PlacedText, OverlayError> {
        match request {
            TextRequest::Center {
                text,
                font_size,
                y,
                emphasis,
            } => self.align_center(*font_size, text, *y, *emphasis),
            TextRequest::Right {
                text,
                font_size,
                right_margin,
                y,
                emphasis,
            } => self.align_right(*font_size, text, *right_margin, *y, *emphasis),
        }
    }

    /// Place every request in order, appending to `out`. Stops at the first failure;
    /// anything placed before it stays in `out`.
    pub fn place_all<'r, I>(&self, requests: I, out: &mut Vec<PlacedText>) -> Result<(), OverlayError>
    where
        I: IntoIterator<Item = &'r TextRequest>,
    {
        for request in requests {
            out.push(self.place(request)?);
        }
        Ok(())
    }
}

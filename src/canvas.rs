use crate::units::*;
use serde::{Deserialize, Serialize};

/// The drawable area of the template page that text is laid out onto.
///
/// A canvas is created once, usually from the media box of the template's first
/// page or from one of the [`pagesize`](crate::pagesize) constants, and is then
/// only ever read. Layout performs no validation of the dimensions: a zero or
/// negative width simply produces coordinates that fall off the page.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageCanvas {
    pub width: Pt,
    pub height: Pt,
}

impl PageCanvas {
    /// Create a canvas of the given dimensions
    pub const fn new(width: Pt, height: Pt) -> PageCanvas {
        PageCanvas { width, height }
    }

    /// Returns the canvas in portrait orientation (width ≤ height)
    pub fn portrait(self) -> PageCanvas {
        if self.width <= self.height {
            self
        } else {
            PageCanvas::new(self.height, self.width)
        }
    }

    /// Returns the canvas in landscape orientation (width ≥ height)
    pub fn landscape(self) -> PageCanvas {
        if self.width >= self.height {
            self
        } else {
            PageCanvas::new(self.height, self.width)
        }
    }

    /// The full page rectangle, anchored at the origin
    pub fn media_box(&self) -> pdf_writer::Rect {
        pdf_writer::Rect {
            x1: 0.0,
            y1: 0.0,
            x2: self.width.into(),
            y2: self.height.into(),
        }
    }
}

impl<W: Into<Pt>, H: Into<Pt>> From<(W, H)> for PageCanvas {
    fn from((width, height): (W, H)) -> Self {
        PageCanvas::new(width.into(), height.into())
    }
}

impl From<pdf_writer::Rect> for PageCanvas {
    fn from(r: pdf_writer::Rect) -> Self {
        PageCanvas::new(Pt(r.x2 - r.x1), Pt(r.y2 - r.y1))
    }
}

//! Text layout onto a fixed page canvas.
//!
//! A [Layout] binds a [PageCanvas] and a [TextMetrics] provider together and turns
//! requests into absolute [`PlacedText`](crate::PlacedText) runs:
//!
//! - [`Layout::align_center`] and [`Layout::align_right`] position single runs
//! - [`Layout::wrap`] flows a paragraph one character at a time into a column,
//!   with no regard for word boundaries
//! - [`Layout::layout_group`] walks a [`Group`](crate::Group) tree, right-aligning
//!   keys, wrapping paragraph values and indenting nested groups with a shrinking
//!   row height
//!
//! Layout never fails on geometry. The only errors come from the metrics provider.
//!
//! # Example
//!
//! ```
//! use pdf_overlay::layout::Layout;
//! use pdf_overlay::{FixedAdvance, Group, PageCanvas, Pt};
//!
//! let canvas = PageCanvas::new(Pt(600.0), Pt(800.0));
//! let metrics = FixedAdvance(Pt(10.0));
//! let layout = Layout::new(&canvas, &metrics);
//!
//! let mut placed = Vec::new();
//! placed.push(layout.align_center(Pt(16.0), "Summary", Pt(760.0), true).unwrap());
//!
//! let tree = Group::new().with("Name", "Ada");
//! let last_y = layout
//!     .layout_group(&tree, Pt(12.0), Pt(50.0), Pt(700.0), Pt(20.0), &mut placed)
//!     .unwrap();
//!
//! assert_eq!(placed[1].x, Pt(510.0));
//! // "Ada" wraps one character per line at 700, 682 and 664, then one row gap
//! assert_eq!(last_y, Pt(644.0));
//! ```

mod align;
mod config;
mod text;
mod tree;

pub use align::*;
pub use config::*;

use crate::canvas::PageCanvas;
use crate::metrics::TextMetrics;

/// The layout engine for one canvas and one font. It holds no mutable state, so
/// identical calls always produce identical output.
pub struct Layout<'a, M: TextMetrics + ?Sized> {
    canvas: &'a PageCanvas,
    metrics: &'a M,
    config: LayoutConfig,
}

impl<'a, M: TextMetrics + ?Sized> Layout<'a, M> {
    /// Create a layout with the default [LayoutConfig]
    pub fn new(canvas: &'a PageCanvas, metrics: &'a M) -> Self {
        Layout {
            canvas,
            metrics,
            config: LayoutConfig::default(),
        }
    }

    /// Replace the layout constants
    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// The page this layout positions text on
    pub fn canvas(&self) -> &PageCanvas {
        self.canvas
    }

    /// The constants this layout uses for key/value trees and wrapping
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }
}

//! Pre-defined canvases for common paper formats.
//!
//! All sizes are provided in portrait orientation; call
//! [`PageCanvas::landscape`](crate::PageCanvas::landscape) for the rotated form.
//!
//! # Example
//!
//! ```
//! use pdf_overlay::pagesize::A4;
//!
//! let canvas = A4.landscape();
//! assert!(canvas.width > canvas.height);
//! ```

use crate::canvas::PageCanvas;
use crate::units::Pt;

// north american sizes
pub const LETTER: PageCanvas = PageCanvas::new(Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const LEGAL: PageCanvas = PageCanvas::new(Pt(8.5 * 72.0), Pt(14.0 * 72.0));
pub const TABLOID: PageCanvas = PageCanvas::new(Pt(11.0 * 72.0), Pt(17.0 * 72.0));

// iso a-series
pub const A2: PageCanvas = PageCanvas::new(Pt(420.0 * 72.0 / 25.4), Pt(594.0 * 72.0 / 25.4));
pub const A3: PageCanvas = PageCanvas::new(Pt(297.0 * 72.0 / 25.4), Pt(420.0 * 72.0 / 25.4));
pub const A4: PageCanvas = PageCanvas::new(Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageCanvas = PageCanvas::new(Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));

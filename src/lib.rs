mod canvas;
pub use canvas::*;

mod error;
pub use error::*;

mod font;
pub use font::Font;

mod info;
pub use info::*;

/// Positioning text on the page: alignment, wrapping and key/value trees
pub mod layout;
pub use layout::{Layout, LayoutConfig, TextRequest};

mod metrics;
pub use metrics::*;

mod node;
pub use node::*;

mod overlay;
pub use overlay::*;

pub mod pagesize;

mod placed;
pub use placed::*;

pub(crate) mod refs;

pub mod render;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality, mostly for splicing the rendered content stream
/// into an existing document
pub use pdf_writer;

use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// Tuned constants for key/value layout. These were fitted to a particular
/// template's column geometry rather than derived from the page size, so they are
/// exposed for adjustment instead of being computed from the canvas.
///
/// Every field is optional when deserializing; missing fields take the defaults.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal gap between the right edge of the key column and the start of the
    /// value column
    pub value_column_offset: Pt,
    /// Wrapped paragraphs are limited to `page width - wrap_inset`, independent of the
    /// nesting depth
    pub wrap_inset: Pt,
    /// Distance between wrapped lines, as a multiple of the font size
    pub line_spacing: f32,
    /// Row height multiplier applied at each level of nesting
    pub nested_row_scale: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            value_column_offset: Pt(50.0),
            wrap_inset: Pt(1300.0),
            line_spacing: 1.5,
            nested_row_scale: 0.6,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> LayoutConfig {
        LayoutConfig::default()
    }

    pub fn value_column_offset<D: Into<Pt>>(&mut self, offset: D) -> &mut Self {
        self.value_column_offset = offset.into();
        self
    }

    pub fn wrap_inset<D: Into<Pt>>(&mut self, inset: D) -> &mut Self {
        self.wrap_inset = inset.into();
        self
    }

    pub fn line_spacing(&mut self, spacing: f32) -> &mut Self {
        self.line_spacing = spacing;
        self
    }

    pub fn nested_row_scale(&mut self, scale: f32) -> &mut Self {
        self.nested_row_scale = scale;
        self
    }
}

use super::Layout;
use crate::error::OverlayError;
use crate::metrics::TextMetrics;
use crate::node::{Group, LayoutNode};
use crate::placed::PlacedText;
use crate::units::Pt;
use log::debug;

impl<M: TextMetrics + ?Sized> Layout<'_, M> {
    /// Lays out a key/value tree as two columns, appending every placed run to `out`.
    ///
    /// Keys are right-aligned `right_margin` points from the right edge of the page.
    /// Values start in a column `value_column_offset` points past that edge:
    ///
    /// * a [LayoutNode::Leaf] is wrapped to `page width - wrap_inset` and followed by a
    ///   gap of `row_height`
    /// * a [LayoutNode::Group] is laid out recursively, right-aligned to end where the
    ///   parent key would end if it were drawn in the value column, using
    ///   `row_height * nested_row_scale` between its own rows. The rest of the parent's
    ///   `row_height` is added once the nested block returns, so every entry is followed
    ///   by exactly one row of the level it belongs to.
    ///
    /// Entries are visited in the group's order. Returns the y coordinate below the last
    /// entry, which can be fed to the next call as `start_y`.
    pub fn layout_group(
        &self,
        group: &Group,
        font_size: Pt,
        right_margin: Pt,
        start_y: Pt,
        row_height: Pt,
        out: &mut Vec<PlacedText>,
    ) -> Result<Pt, OverlayError> {
        let page_width = self.canvas.width;
        let value_x = page_width - right_margin + self.config.value_column_offset;
        let nested_row_height = row_height * self.config.nested_row_scale;

        debug!(
            "laying out {} entries: margin {right_margin}, values at {value_x}, row {row_height}",
            group.len()
        );

        let mut y = start_y;
        for (key, node) in group.iter() {
            out.push(self.align_right(font_size, key, right_margin, y, false)?);

            match node {
                LayoutNode::Leaf(text) => {
                    let max_width = page_width - self.config.wrap_inset;
                    let (lines, last_y) = self.wrap(text, font_size, max_width, (value_x, y))?;
                    out.extend(lines);
                    y = last_y - row_height;
                }
                LayoutNode::Group(children) => {
                    let key_width = self.metrics.width_of_text(key, font_size)?;
                    let child_margin = page_width - value_x - key_width;
                    y = self.layout_group(
                        children,
                        font_size,
                        child_margin,
                        y,
                        nested_row_height,
                        out,
                    )?;
                    y -= row_height - nested_row_height;
                }
            }
        }

        Ok(y)
    }
}

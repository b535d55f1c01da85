use super::Layout;
use crate::error::OverlayError;
use crate::metrics::TextMetrics;
use crate::placed::PlacedText;
use crate::units::Pt;
use log::trace;

impl<M: TextMetrics + ?Sized> Layout<'_, M> {
    /// Lays out text in a character-by-character manner, splitting all words at the exact
    /// end of the line. i.e. if the input were "asdf asdf" and the column only fit 6
    /// characters, this would produce the lines "asdf a" and "sdf". There is no notion of
    /// words, so scripts without spaces between words wrap just as well.
    ///
    /// Every line starts at `start.0`. The first line sits at `start.1` and each following
    /// line `font_size * line_spacing` below the previous one. A character that is wider
    /// than `max_width` on its own still gets a line to itself; a zero or negative
    /// `max_width` therefore places one character per line.
    ///
    /// Returns the lines along with the y coordinate of the last one, or `start.1` if
    /// `text` is empty, so that callers can continue below it.
    pub fn wrap(
        &self,
        text: &str,
        font_size: Pt,
        max_width: Pt,
        start: (Pt, Pt),
    ) -> Result<(Vec<PlacedText>, Pt), OverlayError> {
        let (x, start_y) = start;

        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();
        let mut current_width = Pt(0.0);

        let mut buf = [0u8; 4];
        for ch in text.chars() {
            let advance = self
                .metrics
                .width_of_text(ch.encode_utf8(&mut buf), font_size)?;

            if current_width + advance > max_width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                current.push(ch);
                current_width = advance;
            } else {
                current.push(ch);
                current_width += advance;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }

        let placed: Vec<PlacedText> = lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                let y = start_y - font_size * i as f32 * self.config.line_spacing;
                trace!("line {i} at ({x}, {y}): {line:?}");
                PlacedText::new(line, x, y, font_size, false)
            })
            .collect();

        let last_y = placed.last().map(|line| line.y).unwrap_or(start_y);
        Ok((placed, last_y))
    }
}

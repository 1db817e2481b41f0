//! Snapshot rendering helpers.
//!
//! Convert rendered widget output into plain text for assertions. Rows are
//! right-trimmed and joined with `'\n'`; the last row has no trailing newline.

use crate::geometry::Region;
use crate::render::strip::Strip;
use crate::style::theme::Theme;
use crate::widget::Widget;

/// Render a widget at the origin with the light theme and return its text.
///
/// # Examples
///
/// ```ignore
/// use hig_tui::components::TextArea;
/// use hig_tui::testing::render_to_string;
///
/// let out = render_to_string(&TextArea::new().with_placeholder("Notes"), 20, 4);
/// assert!(out.contains("Notes"));
/// ```
pub fn render_to_string(widget: &dyn Widget, width: i32, height: i32) -> String {
    render_with_theme(widget, width, height, &Theme::light())
}

/// Same as [`render_to_string`] with an explicit theme.
pub fn render_with_theme(widget: &dyn Widget, width: i32, height: i32, theme: &Theme) -> String {
    let strips = widget.render(Region::new(0, 0, width, height), theme);
    strips_to_string(&strips, width, height)
}

/// Overlay strips onto a blank `width` x `height` grid and return its text.
pub fn strips_to_string(strips: &[Strip], width: i32, height: i32) -> String {
    if width <= 0 || height <= 0 {
        return String::new();
    }

    let mut grid = vec![vec![' '; width as usize]; height as usize];
    for strip in strips {
        if strip.y < 0 || strip.y >= height {
            continue;
        }
        let row = &mut grid[strip.y as usize];
        for (i, cell) in strip.cells.iter().enumerate() {
            let x = strip.x_offset + i as i32;
            if (0..width).contains(&x) {
                row[x as usize] = cell.ch;
            }
        }
    }

    grid.into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::strip::CellStyle;

    fn strip(y: i32, x: i32, text: &str) -> Strip {
        let mut s = Strip::new(y, x);
        s.push_str(text, CellStyle::default());
        s
    }

    #[test]
    fn overlays_and_trims() {
        let out = strips_to_string(&[strip(0, 1, "ab"), strip(1, 0, "c ")], 4, 2);
        assert_eq!(out, " ab\nc");
    }

    #[test]
    fn clips_out_of_bounds() {
        let out = strips_to_string(&[strip(0, 2, "abcd"), strip(5, 0, "z")], 3, 1);
        assert_eq!(out, "  a");
    }

    #[test]
    fn zero_size_is_empty() {
        assert_eq!(strips_to_string(&[strip(0, 0, "a")], 0, 1), "");
    }
}

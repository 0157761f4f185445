//! Gradient border assembly.
//!
//! Builds the four gradient-colored edges and joins the content rows into
//! them. Gradients are plain color sequences; each glyph is painted at the
//! moment it is emitted.

use crate::ansi::visible_width;
use crate::color::{build_gradient, Color};
use crate::config::BorderPalette;
use crate::theme::Theme;

/// Heavy horizontal border glyph
const HORIZONTAL: &str = "━";
/// Heavy vertical border glyph
const VERTICAL: &str = "┃";
const TOP_LEFT: &str = "┏";
const TOP_RIGHT: &str = "┓";
const BOTTOM_LEFT: &str = "┗";
const BOTTOM_RIGHT: &str = "┛";

/// Parse an edge palette into gradient anchors.
fn anchors(palette: &[String]) -> Vec<Color> {
    palette.iter().map(|hex| Color::from_hex(hex)).collect()
}

/// Render content lines inside a gradient border.
///
/// `width` is the inner width: the widest content line plus both paddings.
/// Each output row carries one border glyph on each side, so every row of
/// the result measures `width + 2` visible units.
///
/// Top and bottom gradients span `width` cells. Left and right gradients
/// are built with exactly `lines.len() + 2` entries: index 0 and the last
/// index color the corners, the indices between color the vertical glyphs
/// row by row. Corners always take their colors from the adjacent edge
/// gradients, so the edges agree where they meet.
pub fn render_box(
    lines: &[String],
    width: usize,
    left_padding: usize,
    right_padding: usize,
    palette: &BorderPalette,
    theme: &Theme,
) -> String {
    let height = lines.len();

    let top = build_gradient(&anchors(&palette.top), width);
    let bottom = build_gradient(&anchors(&palette.bottom), width);
    let left = build_gradient(&anchors(&palette.left), height + 2);
    let right = build_gradient(&anchors(&palette.right), height + 2);

    let top_left = theme.paint(top[0], TOP_LEFT);
    let top_right = theme.paint(right[0], TOP_RIGHT);
    let bottom_left = theme.paint(bottom[0], BOTTOM_LEFT);
    let bottom_right = theme.paint(right[height + 1], BOTTOM_RIGHT);

    let top_border: String = top.iter().map(|&c| theme.paint(c, HORIZONTAL)).collect();
    let bottom_border: String = bottom.iter().map(|&c| theme.paint(c, HORIZONTAL)).collect();

    let content_max_width = width.saturating_sub(left_padding + right_padding);
    let left_pad = " ".repeat(left_padding);

    let mut rows = Vec::with_capacity(height + 2);
    rows.push(format!("{}{}{}", top_left, top_border, top_right));
    for (i, line) in lines.iter().enumerate() {
        let extra = content_max_width.saturating_sub(visible_width(line));
        let right_pad = " ".repeat(right_padding + extra);
        rows.push(format!(
            "{}{}{}{}{}",
            theme.paint(left[i + 1], VERTICAL),
            left_pad,
            line,
            right_pad,
            theme.paint(right[i + 1], VERTICAL),
        ));
    }
    rows.push(format!("{}{}{}", bottom_left, bottom_border, bottom_right));

    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn every_row_has_the_same_visible_width() {
        let palette = BorderPalette::default();
        let content = lines(&["short", "a longer line", ""]);
        for theme in [Theme::ansi(), Theme::plain()] {
            let rendered = render_box(&content, 21, 3, 5, &palette, &theme);
            for row in rendered.lines() {
                assert_eq!(visible_width(row), 23, "row: {:?}", row);
            }
        }
    }

    #[test]
    fn row_count_is_content_plus_borders() {
        let palette = BorderPalette::default();
        let content = lines(&["one", "two"]);
        let rendered = render_box(&content, 16, 3, 5, &palette, &Theme::plain());
        assert_eq!(rendered.lines().count(), 4);
    }

    #[test]
    fn corner_glyphs_frame_the_box() {
        let palette = BorderPalette::default();
        let content = lines(&["hi"]);
        let rendered = render_box(&content, 10, 3, 5, &palette, &Theme::plain());
        let rows: Vec<&str> = rendered.lines().collect();
        assert!(rows[0].starts_with(TOP_LEFT));
        assert!(rows[0].ends_with(TOP_RIGHT));
        assert!(rows[2].starts_with(BOTTOM_LEFT));
        assert!(rows[2].ends_with(BOTTOM_RIGHT));
    }

    #[test]
    fn content_rows_carry_padding() {
        let palette = BorderPalette::default();
        let content = lines(&["hi"]);
        let rendered = render_box(&content, 10, 3, 5, &palette, &Theme::plain());
        let rows: Vec<&str> = rendered.lines().collect();
        // 3 spaces, the line, then 5 + (2 - 2) spaces of right padding.
        assert_eq!(rows[1], "┃   hi     ┃");
    }

    #[test]
    fn styled_rows_align_with_plain_rows() {
        let palette = BorderPalette::default();
        let content = lines(&["styled \x1b[33mlabel\x1b[0m row", "plain row"]);
        let rendered = render_box(&content, 26, 3, 5, &palette, &Theme::ansi());
        let widths: Vec<usize> = rendered.lines().map(visible_width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "widths: {:?}", widths);
    }

    #[test]
    fn single_anchor_palette_renders() {
        let palette = BorderPalette {
            top: vec!["#FF0000".to_string()],
            right: vec!["#00FF00".to_string()],
            bottom: vec!["#0000FF".to_string()],
            left: vec!["#FFFFFF".to_string()],
        };
        let content = lines(&["x"]);
        let rendered = render_box(&content, 9, 3, 5, &palette, &Theme::ansi());
        assert_eq!(rendered.lines().count(), 3);
        for row in rendered.lines() {
            assert_eq!(visible_width(row), 11);
        }
    }
}

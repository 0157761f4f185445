//! Card assembly.
//!
//! Ties the content formatter and border renderer together: measures the
//! content, derives the card width, and produces the final block.

use tracing::trace;

use crate::ansi::visible_width;
use crate::border;
use crate::config::Config;
use crate::content;
use crate::theme::Theme;

/// Spaces between the left border and the content.
pub const LEFT_PADDING: usize = 3;
/// Minimum spaces between the content and the right border.
pub const RIGHT_PADDING: usize = 5;

/// Render the full card as one multi-line block, surrounded by a blank
/// line above and below.
///
/// The card width derives from the content: the widest visible line plus
/// both paddings. Every row of the framed output then measures that width
/// plus the two border glyphs.
pub fn render(config: &Config, theme: &Theme) -> String {
    let label_width = content::max_label_width(&config.profile.links);
    let lines = content::build_content(&config.profile, label_width, theme);

    let text_max_width = lines
        .iter()
        .map(|line| visible_width(line))
        .max()
        .unwrap_or(0);
    let card_width = text_max_width + LEFT_PADDING + RIGHT_PADDING;
    trace!(
        "card geometry: label column {}, text width {}, card width {}",
        label_width,
        text_max_width,
        card_width
    );

    let boxed = border::render_box(
        &lines,
        card_width,
        LEFT_PADDING,
        RIGHT_PADDING,
        &config.borders,
        theme,
    );

    format!("\n{}\n", boxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_frames_card_with_blank_lines() {
        let card = render(&Config::default(), &Theme::plain());
        assert!(card.starts_with('\n'));
        assert!(card.ends_with('\n'));
    }

    #[test]
    fn rendered_rows_share_one_visible_width() {
        let config = Config::default();
        for theme in [Theme::ansi(), Theme::plain()] {
            let card = render(&config, &theme);
            let widths: Vec<usize> = card
                .lines()
                .filter(|line| !line.is_empty())
                .map(visible_width)
                .collect();
            assert!(!widths.is_empty());
            assert!(
                widths.iter().all(|&w| w == widths[0]),
                "row widths differ: {:?}",
                widths
            );
        }
    }

    #[test]
    fn card_width_derives_from_content() {
        let config = Config::default();
        let theme = Theme::plain();
        let label_width = content::max_label_width(&config.profile.links);
        let lines = content::build_content(&config.profile, label_width, &theme);
        let text_max = lines.iter().map(|l| visible_width(l)).max().unwrap();

        let card = render(&config, &theme);
        let first_row = card.lines().find(|l| !l.is_empty()).unwrap();
        assert_eq!(
            visible_width(first_row),
            text_max + LEFT_PADDING + RIGHT_PADDING + 2
        );
    }
}

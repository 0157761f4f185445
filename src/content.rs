//! Content line construction: greeting block and link rows.
//!
//! Produces the ordered lines that go inside the border. Labels share one
//! alignment column; link values are hyperlink-wrapped so terminals that
//! support OSC 8 make them clickable.

use crate::ansi::visible_width;
use crate::config::{LinkEntry, Profile};
use crate::theme::Theme;

/// Greeting glyph shown at the top of the card.
const GREETING: &str = "👋";

/// Gap between the label column and the link text.
const LABEL_GAP: &str = "  ";

/// Widest `"<emoji> <label>"` prefix across all links.
///
/// Every link row pads its label part out to this column so the link
/// values line up vertically. Links without an emoji still carry the
/// separator space.
pub fn max_label_width(links: &[LinkEntry]) -> usize {
    links
        .iter()
        .map(|link| {
            let emoji = link.emoji.as_deref().unwrap_or("");
            visible_width(&format!("{} {}", emoji, link.label))
        })
        .max()
        .unwrap_or(0)
}

/// Resolve the URL a link should point at.
///
/// Handle-shaped display text (`@name`) under the X and Bluesky labels is
/// rewritten to the canonical profile URL, overriding whatever URL the
/// config carries for that link.
pub fn resolve_url(link: &LinkEntry) -> String {
    if let Some(handle) = link.display_text.strip_prefix('@') {
        match link.label.to_lowercase().as_str() {
            "x" => return format!("https://x.com/{}", handle),
            "bluesky" => return format!("https://bsky.app/profile/{}", handle),
            _ => {}
        }
    }
    link.url.clone()
}

/// Format one link row: emoji, padded label, clickable display text.
///
/// With a `label_width`, the label part is padded to that column and the
/// gap appended; without one, a single space separates label and value.
pub fn format_link(
    theme: &Theme,
    emoji: &str,
    label: &str,
    url: &str,
    display_text: &str,
    label_width: Option<usize>,
) -> String {
    let clickable = theme.hyperlink(url, &theme.link_text(display_text));
    let label_part = format!("{} {}", emoji, theme.label_text(label));
    match label_width {
        Some(width) => {
            let padding = " ".repeat(width.saturating_sub(visible_width(&label_part)));
            format!("{}{}{}{}", label_part, padding, LABEL_GAP, clickable)
        }
        None => format!("{} {}", label_part, clickable),
    }
}

/// Build the ordered content lines of the card.
///
/// Greeting block first, then the link rows. A link that declares a
/// section gets a header line the first time its section appears; a blank
/// line separates consecutive sections. The previous section title is a
/// local accumulator, so repeated renders share no state.
pub fn build_content(profile: &Profile, label_width: usize, theme: &Theme) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(String::new());
    lines.push(theme.heading_text(GREETING));
    lines.push(String::new());

    lines.push(theme.heading_text(&format!("I'm {}", theme.bold(&profile.name))));
    lines.push(theme.heading_text(&profile.title));
    lines.push(String::new());

    let mut current_section: Option<&str> = None;
    for link in &profile.links {
        if let Some(section) = link.section.as_deref() {
            if current_section != Some(section) {
                if current_section.is_some() {
                    lines.push(String::new());
                }
                lines.push(theme.section_text(&format!("  {}", section)));
                current_section = Some(section);
            }
        }

        let url = resolve_url(link);
        lines.push(format_link(
            theme,
            link.emoji.as_deref().unwrap_or(""),
            &link.label,
            &url,
            &link.display_text,
            Some(label_width),
        ));
    }
    lines.push(String::new());

    lines
}

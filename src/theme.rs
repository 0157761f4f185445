//! ANSI styling for card output.
//!
//! Centralizes the escape codes the renderer emits: SGR styles for color
//! and emphasis, OSC 8 for hyperlinks, truecolor for the border gradient.
//! The plain variant emits no escapes at all, for pipes and `NO_COLOR`.

use crate::color::Color;

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// ANSI SGR codes used by the card renderer
pub mod ansi {
    /// Green (ANSI 32) - greeting, name and title lines
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow (ANSI 33) - link labels
    pub const YELLOW: &str = "\x1b[33m";
    /// Blue (ANSI 34) - section headers
    pub const BLUE: &str = "\x1b[34m";
    /// Cyan (ANSI 36) - link display text
    pub const CYAN: &str = "\x1b[36m";
    /// Bold on
    pub const BOLD: &str = "\x1b[1m";
    /// Bold off - keeps the surrounding color active, unlike a full reset
    pub const BOLD_OFF: &str = "\x1b[22m";
    /// Underline on
    pub const UNDERLINE: &str = "\x1b[4m";
    /// Reset color and attributes
    pub const RESET: &str = "\x1b[0m";
}

/// Selects between real ANSI output and plain text.
///
/// Every styled fragment in the render pipeline goes through these
/// helpers, so a single constructor choice decides whether the card
/// carries escape sequences. Width math is unaffected either way, since
/// escapes are stripped before measuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    styled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::ansi()
    }
}

impl Theme {
    /// Theme emitting ANSI escape sequences.
    pub const fn ansi() -> Self {
        Self { styled: true }
    }

    /// Theme emitting no escape sequences at all.
    pub const fn plain() -> Self {
        Self { styled: false }
    }

    pub const fn is_styled(&self) -> bool {
        self.styled
    }

    /// Paint text with a 24-bit foreground color.
    pub fn paint(&self, color: Color, text: &str) -> String {
        if !self.styled {
            return text.to_string();
        }
        format!(
            "\x1b[38;2;{};{};{}m{}{}",
            color.r, color.g, color.b, text, ansi::RESET
        )
    }

    /// Style for the greeting, name and title lines.
    pub fn heading_text(&self, text: &str) -> String {
        self.sgr_text(ansi::GREEN, text)
    }

    /// Style for section header lines.
    pub fn section_text(&self, text: &str) -> String {
        self.sgr_text(ansi::BLUE, text)
    }

    /// Style for link labels.
    pub fn label_text(&self, text: &str) -> String {
        self.sgr_text(ansi::YELLOW, text)
    }

    /// Style for link display text: underlined and colored.
    pub fn link_text(&self, text: &str) -> String {
        if !self.styled {
            return text.to_string();
        }
        format!("{}{}{}{}", ansi::CYAN, ansi::UNDERLINE, text, ansi::RESET)
    }

    /// Bold a fragment without resetting the surrounding color.
    pub fn bold(&self, text: &str) -> String {
        if !self.styled {
            return text.to_string();
        }
        format!("{}{}{}", ansi::BOLD, text, ansi::BOLD_OFF)
    }

    /// Wrap text in an OSC 8 hyperlink targeting `url`.
    pub fn hyperlink(&self, url: &str, text: &str) -> String {
        if !self.styled {
            return text.to_string();
        }
        format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", url, text)
    }

    fn sgr_text(&self, code: &str, text: &str) -> String {
        if !self.styled {
            return text.to_string();
        }
        format!("{}{}{}", code, text, ansi::RESET)
    }
}

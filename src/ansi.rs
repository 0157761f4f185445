//! Escape-aware width measurement.
//!
//! Card lines mix printable text with SGR style sequences and OSC 8
//! hyperlinks. All alignment math has to ignore the non-printing bytes,
//! so padding decisions go through [`visible_width`].

/// Escape character opening every recognized sequence.
const ESC: char = '\u{1b}';

/// OSC 8 hyperlink prefix (`ESC ] 8 ; ;`).
const HYPERLINK_PREFIX: &str = "\u{1b}]8;;";

/// String terminator closing an OSC 8 sequence (`ESC \`).
const LINK_TERMINATOR: &str = "\u{1b}\\";

/// Remove recognized escape sequences in a single left-to-right scan.
///
/// Three shapes are recognized:
/// - hyperlink open: `ESC ] 8 ; ; <url> ESC \`
/// - hyperlink close: the same shape with an empty payload
/// - SGR style: `ESC [`, digits and semicolons, one trailing ASCII letter
///
/// Scanning resumes directly after each removed sequence, so adjacent and
/// back-to-back sequences need no second pass. Anything else - including
/// an unterminated escape - is copied through unchanged.
pub fn strip_escapes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while !rest.is_empty() {
        if let Some(len) = escape_len(rest) {
            rest = &rest[len..];
            continue;
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }
    out
}

/// Byte length of the escape sequence at the start of `s`, or `None` when
/// `s` does not begin with a recognized sequence.
fn escape_len(s: &str) -> Option<usize> {
    if let Some(body) = s.strip_prefix(HYPERLINK_PREFIX) {
        // The payload runs up to the ESC \ terminator and cannot itself
        // contain an escape character.
        let end = body.find(ESC)?;
        if body[end..].starts_with(LINK_TERMINATOR) {
            return Some(HYPERLINK_PREFIX.len() + end + LINK_TERMINATOR.len());
        }
        return None;
    }
    if let Some(body) = s.strip_prefix("\u{1b}[") {
        let params = body
            .bytes()
            .take_while(|b| b.is_ascii_digit() || *b == b';')
            .count();
        if body.as_bytes().get(params)?.is_ascii_alphabetic() {
            return Some(2 + params + 1);
        }
        return None;
    }
    None
}

/// Width of `s` as the renderer lines it up: the number of characters left
/// after stripping escapes.
///
/// Counts encoded characters, not rendered terminal cells. Emoji that a
/// terminal draws two cells wide still count as one unit here, which can
/// shift borders on such terminals - a known limitation.
pub fn visible_width(s: &str) -> usize {
    strip_escapes(s).chars().count()
}

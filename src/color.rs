//! RGB color parsing and gradient interpolation.
//!
//! Border gradients are built from hex anchor palettes. A gradient is a
//! plain ordered `Vec<Color>` with one entry per border cell; coloring is
//! applied later, at the point where a glyph is emitted.

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Black, the fallback for malformed hex codes.
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 3- or 6-hex-digit color code, with or without a leading `#`.
    ///
    /// Three-digit forms are expanded by doubling each digit (`#abc` ->
    /// `#aabbcc`). Anything that does not yield at least six hex digits
    /// falls back to black instead of failing - a palette typo must not
    /// abort rendering.
    pub fn from_hex(code: &str) -> Self {
        let hex = code.trim_start_matches('#');
        let expanded: String;
        let hex = if hex.chars().count() == 3 {
            expanded = hex.chars().flat_map(|c| [c, c]).collect();
            &expanded
        } else {
            hex
        };

        let bytes = hex.as_bytes();
        if bytes.len() < 6 {
            return Self::BLACK;
        }
        let channel = |i: usize| {
            std::str::from_utf8(&bytes[i..i + 2])
                .ok()
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        };
        match (channel(0), channel(2), channel(4)) {
            (Some(r), Some(g), Some(b)) => Self { r, g, b },
            _ => Self::BLACK,
        }
    }

    /// Linear interpolation towards `other`, per channel, rounded to the
    /// nearest integer. `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let channel =
            |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}

/// Build a gradient of exactly `steps` colors across the given anchors.
///
/// `steps` is split over the `anchors.len() - 1` segments; when it does not
/// divide evenly, the earliest segments each receive one extra step. A
/// segment of size one (or an empty segment, when there are more anchors
/// than steps) contributes its start color. The result is padded with the
/// final anchor and truncated so its length always equals `steps` exactly.
pub fn build_gradient(anchors: &[Color], steps: usize) -> Vec<Color> {
    let Some((&last, _)) = anchors.split_last() else {
        return Vec::new();
    };
    if anchors.len() == 1 {
        return vec![last; steps];
    }

    let segments = anchors.len() - 1;
    let base = steps / segments;
    let remainder = steps % segments;

    let mut gradient = Vec::with_capacity(steps + segments);
    for (i, pair) in anchors.windows(2).enumerate() {
        let count = base + usize::from(i < remainder);
        if count == 0 {
            gradient.push(pair[0]);
            continue;
        }
        for j in 0..count {
            let t = if count > 1 {
                j as f64 / (count - 1) as f64
            } else {
                0.0
            };
            gradient.push(pair[0].lerp(pair[1], t));
        }
    }

    while gradient.len() < steps {
        gradient.push(last);
    }
    gradient.truncate(steps);
    gradient
}

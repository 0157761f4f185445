//! termcard library
//!
//! Renders a gradient-bordered terminal business card: a greeting block,
//! name and title, and labeled, clickable links, framed by color
//! gradients running along the four border edges.

pub mod ansi;
pub mod border;
pub mod card;
pub mod cli;
pub mod color;
pub mod config;
pub mod content;
pub mod theme;

pub use color::Color;
pub use config::{Config, LinkEntry, Profile};
pub use theme::Theme;

//! Show command handler - renders the card.

use anyhow::Result;

use termcard::{card, Config, Theme};

/// Render the card to stdout.
pub fn handle(config: &Config, theme: &Theme) -> Result<()> {
    println!("{}", card::render(config, theme));
    Ok(())
}

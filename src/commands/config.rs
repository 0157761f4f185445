//! Config subcommands handler

use anyhow::{Context, Result};

use termcard::Config;

/// Print the active configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    print!("{}", toml_str);
    Ok(())
}

/// Write the default config file.
///
/// Refuses to overwrite an existing file unless `force` is set, so a
/// hand-edited card is not lost to a stray init.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(force: bool) -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {} (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default().save()?;
    println!("Wrote {}", config_path.display());
    Ok(())
}

/// Print the config file location.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

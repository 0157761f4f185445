//! termcard - CLI entry point

use anyhow::Result;
use clap::Parser;

use termcard::cli::{Cli, ColorMode, Commands, ConfigCommands};
use termcard::{Config, Theme};

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let theme = resolve_theme(cli.color);

    match &cli.command {
        None | Some(Commands::Show) => commands::show::handle(&load_config(&cli)?, &theme),
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&load_config(&cli)?),
            ConfigCommands::Init { force } => commands::config::handle_init(*force),
            ConfigCommands::Path => commands::config::handle_path(),
        },
        Some(Commands::Completions { shell }) => {
            commands::completions::generate_completions::<Cli>(*shell)
        }
    }
}

/// Load the configuration, honoring an explicit `--config` path.
fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Resolve the color mode to a theme.
///
/// `auto` follows the NO_COLOR convention and falls back to a TTY check
/// on stdout, so piped output stays free of escape sequences.
fn resolve_theme(mode: ColorMode) -> Theme {
    let styled = match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
        }
    };
    if styled {
        Theme::ansi()
    } else {
        Theme::plain()
    }
}

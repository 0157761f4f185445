//! CLI definitions for termcard
//!
//! This module contains the clap CLI structure definitions, separated from
//! main.rs so the parser can be exercised directly in tests.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

/// Build clap styles using our theme colors.
///
/// Maps the card's colors onto clap's styling system for a consistent CLI
/// appearance: cyan for headers and command names (the link color), white
/// for descriptions and placeholders.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

/// Version string; dev builds append the short git commit hash.
pub fn version_string() -> String {
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => format!("{} ({})", env!("CARGO_PKG_VERSION"), &sha[..sha.len().min(7)]),
        None => env!("CARGO_PKG_VERSION").to_string(),
    }
}

#[derive(Parser)]
#[command(name = "termcard")]
#[command(about = "[ termcard ] - your business card, rendered in the terminal")]
#[command(
    long_about = "termcard - render a gradient-bordered business card in the terminal.

The card shows a name, a title and a list of labeled links. Links are
wrapped in OSC 8 hyperlinks, so terminals that support them make the
rows clickable. Everything on the card comes from a TOML config file
at ~/.config/termcard/config.toml; without one, built-in defaults are
used.

QUICK START:
    termcard                       Render the card
    termcard config init           Write the default config file
    termcard config show           Print the active configuration
    termcard config path           Print the config file location

OUTPUT:
    termcard --color never         Render without escape sequences
    termcard --color always        Force colors, even when piped"
)]
#[command(version = version_string())]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Use an explicit config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// When to emit ANSI colors and hyperlinks
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// When the card output carries escape sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Colors when stdout is a terminal and NO_COLOR is unset
    Auto,
    /// Always emit colors and hyperlinks
    Always,
    /// Never emit escape sequences
    Never,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the card (the default when no command is given)
    Show,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Generate a completion script for your shell.

EXAMPLES:
    termcard completions --shell zsh > ~/.zfunc/_termcard
    termcard completions --shell bash > /etc/bash_completion.d/termcard")]
    Completions {
        /// Target shell
        #[arg(long, value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the active configuration as TOML
    Show,
    /// Write the default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Print the config file location
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_no_command_parses() {
        let cli = Cli::try_parse_from(["termcard"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.color, ColorMode::Auto);
        assert!(cli.config.is_none());
    }

    #[test]
    fn cli_show_parses() {
        let cli = Cli::try_parse_from(["termcard", "show"]).unwrap();
        match cli.command {
            Some(Commands::Show) => {}
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn cli_color_flag_parses() {
        let cli = Cli::try_parse_from(["termcard", "--color", "never"]).unwrap();
        assert_eq!(cli.color, ColorMode::Never);
        let cli = Cli::try_parse_from(["termcard", "--color", "always"]).unwrap();
        assert_eq!(cli.color, ColorMode::Always);
    }

    #[test]
    fn cli_rejects_unknown_color_mode() {
        assert!(Cli::try_parse_from(["termcard", "--color", "sometimes"]).is_err());
    }

    #[test]
    fn cli_config_flag_parses() {
        let cli = Cli::try_parse_from(["termcard", "--config", "/tmp/card.toml"]).unwrap();
        assert_eq!(cli.config.unwrap(), PathBuf::from("/tmp/card.toml"));
    }

    #[test]
    fn cli_config_flag_is_global() {
        let cli =
            Cli::try_parse_from(["termcard", "config", "show", "--config", "/tmp/c.toml"]).unwrap();
        assert!(cli.config.is_some());
    }

    #[test]
    fn cli_config_show_parses() {
        let cli = Cli::try_parse_from(["termcard", "config", "show"]).unwrap();
        match cli.command {
            Some(Commands::Config(ConfigCommands::Show)) => {}
            _ => panic!("Expected Config Show command"),
        }
    }

    #[test]
    fn cli_config_init_parses() {
        let cli = Cli::try_parse_from(["termcard", "config", "init", "--force"]).unwrap();
        match cli.command {
            Some(Commands::Config(ConfigCommands::Init { force: true })) => {}
            _ => panic!("Expected Config Init command"),
        }
    }

    #[test]
    fn cli_config_path_parses() {
        let cli = Cli::try_parse_from(["termcard", "config", "path"]).unwrap();
        match cli.command {
            Some(Commands::Config(ConfigCommands::Path)) => {}
            _ => panic!("Expected Config Path command"),
        }
    }

    #[test]
    fn cli_completions_parses() {
        let cli = Cli::try_parse_from(["termcard", "completions", "--shell", "zsh"]).unwrap();
        match cli.command {
            Some(Commands::Completions { shell }) => {
                assert_eq!(shell, CompletionShell::Zsh);
            }
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn version_string_is_not_empty() {
        assert!(version_string().starts_with(env!("CARGO_PKG_VERSION")));
    }
}

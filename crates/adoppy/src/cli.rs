//! Command-line interface for `adoppy`.
//!
//! Defines the CLI contract using clap derive macros.
//!
//! # Examples
//!
//! ```bash
//! # Run the TUI
//! adoppy
//!
//! # Run headless render validation (for CI)
//! adoppy --self-check
//!
//! # Print the catalog as JSON
//! adoppy catalog --pretty
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Adoppy - a terminal puppy adoption demo.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "adoppy",
    author,
    version,
    about = "Adoppy - a terminal puppy adoption demo",
    long_about = "Adoppy - a terminal puppy adoption demo.\n\n\
                  A fixed catalog of adoptable puppies with a detail screen \
                  for the selected one. Navigate with j/k, view with Enter, \
                  go back with Esc."
)]
pub struct Cli {
    /// Force color output off
    ///
    /// Respects the `NO_COLOR` environment variable per spec
    #[arg(
        long,
        env = "NO_COLOR",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Disable alternate screen mode
    ///
    /// Runs in the main terminal buffer; useful for debugging
    #[arg(long, env = "ADOPPY_NO_ALT_SCREEN")]
    pub no_alt_screen: bool,

    /// Write logs to this file
    ///
    /// Logging is disabled when unset, since stdout belongs to the TUI
    #[arg(long, env = "ADOPPY_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Render all screens headlessly and exit
    ///
    /// Useful for CI validation without a TTY
    #[arg(long)]
    pub self_check: bool,

    /// Optional subcommand
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the sample catalog as JSON
    Catalog {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_contract() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["adoppy"]).unwrap();
        assert!(!cli.no_color);
        assert!(!cli.no_alt_screen);
        assert!(!cli.self_check);
        assert_eq!(cli.verbose, 0);
        assert!(cli.log_file.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_catalog_subcommand() {
        let cli = Cli::try_parse_from(["adoppy", "catalog", "--pretty"]).unwrap();
        match cli.command {
            Some(Command::Catalog { pretty }) => assert!(pretty),
            _ => panic!("expected catalog subcommand"),
        }
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::try_parse_from(["adoppy", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}

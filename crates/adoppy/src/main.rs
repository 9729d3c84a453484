#![forbid(unsafe_code)]

//! Adoppy binary entry point.

use anyhow::Context;
use clap::Parser;
use teacup::Program;

use adoppy::app::{self, App};
use adoppy::catalog::{CatalogSource, SampleCatalog};
use adoppy::cli::{Cli, Command};
use adoppy::logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    logging::init(cli.verbose, cli.log_file.as_deref())?;

    if let Some(Command::Catalog { pretty }) = cli.command {
        let catalog = SampleCatalog::new();
        let json = if pretty {
            serde_json::to_string_pretty(catalog.puppies())
        } else {
            serde_json::to_string(catalog.puppies())
        }
        .context("failed to serialize catalog")?;
        println!("{json}");
        return Ok(());
    }

    if cli.self_check {
        print!("{}", app::self_check());
        return Ok(());
    }

    tracing::info!("starting adoppy");

    let program = if cli.no_alt_screen {
        Program::new(App::new())
    } else {
        Program::new(App::new()).with_alt_screen()
    };
    program.run().context("failed to run adoppy")?;

    Ok(())
}

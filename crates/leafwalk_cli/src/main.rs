//! leafwalk CLI
//!
//! Extract every textual leaf from structured documents.

mod cli;
mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;
use miette::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::init::run_init;
use commands::shapes::run_shapes;
use commands::strings::run_strings;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Strings {
            paths,
            format,
            with_path,
        } => run_strings(cli, paths, *format, *with_path),
        Commands::Shapes { paths, format } => run_shapes(cli, paths, *format),
        Commands::Init { force } => run_init(*force),
    }
}

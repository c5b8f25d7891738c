//! Subcommand implementations

pub mod init;
pub mod shapes;
pub mod strings;

use std::path::PathBuf;

use leafwalk_core::LeafwalkConfig;
use miette::{IntoDiagnostic, Result};
use tracing::info;

use crate::cli::Cli;

/// Loads the configuration named on the command line, or discovers one in
/// the current directory.
pub fn load_config(cli: &Cli) -> Result<LeafwalkConfig> {
    if let Some(ref path) = cli.config {
        return LeafwalkConfig::from_file(path).into_diagnostic();
    }
    find_config()
}

pub fn find_config() -> Result<LeafwalkConfig> {
    if let Some(path) = LeafwalkConfig::discover(".") {
        info!("Using config: {}", path.display());
        return LeafwalkConfig::from_file(&path).into_diagnostic();
    }

    info!("No config file found, using defaults");
    Ok(LeafwalkConfig::new())
}

/// Falls back to the configuration root when no paths were given.
pub fn paths_or_root(paths: &[PathBuf], config: &LeafwalkConfig) -> Vec<PathBuf> {
    if paths.is_empty() {
        vec![config.root()]
    } else {
        paths.to_vec()
    }
}

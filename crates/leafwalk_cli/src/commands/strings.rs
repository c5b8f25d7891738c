//! Strings command implementation

use std::path::PathBuf;

use leafwalk_core::Extractor;
use miette::Result;
use tracing::info;

use super::{load_config, paths_or_root};
use crate::cli::{Cli, OutputFormat};
use crate::output::output_texts;

pub fn run_strings(
    cli: &Cli,
    paths: &[PathBuf],
    format: OutputFormat,
    with_path: bool,
) -> Result<()> {
    let config = load_config(cli)?;
    let paths = paths_or_root(paths, &config);
    let extractor = Extractor::new(config);

    let texts = extractor.extract_paths(&paths);
    info!("Found {} strings", texts.len());

    output_texts(&texts, format, with_path)
}

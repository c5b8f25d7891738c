//! Shapes command implementation

use std::path::PathBuf;

use leafwalk_core::Extractor;
use miette::Result;

use super::{load_config, paths_or_root};
use crate::cli::{Cli, OutputFormat};
use crate::output::output_census;

pub fn run_shapes(cli: &Cli, paths: &[PathBuf], format: OutputFormat) -> Result<()> {
    let config = load_config(cli)?;
    let paths = paths_or_root(paths, &config);
    let extractor = Extractor::new(config);

    let census = extractor.census_paths(&paths);

    output_census(&census, format)
}

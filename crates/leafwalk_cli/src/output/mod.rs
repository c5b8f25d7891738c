//! Output formatting module

mod json;
mod text;

use leafwalk_core::{ExtractedText, ShapeCensus};
use miette::Result;

use crate::cli::OutputFormat;

pub fn output_texts(texts: &[ExtractedText], format: OutputFormat, with_path: bool) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_texts_json(texts, with_path),
        OutputFormat::Text => {
            text::output_texts(texts, with_path);
            Ok(())
        }
    }
}

pub fn output_census(census: &ShapeCensus, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_census_json(census),
        OutputFormat::Text => {
            text::output_census(census);
            Ok(())
        }
    }
}

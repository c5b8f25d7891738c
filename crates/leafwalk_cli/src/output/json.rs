//! JSON output formatter

use leafwalk_core::{ExtractedText, ShapeCensus};
use miette::{IntoDiagnostic, Result};

pub fn output_texts_json(texts: &[ExtractedText], with_path: bool) -> Result<()> {
    let output = if with_path {
        serde_json::to_value(texts).into_diagnostic()?
    } else {
        serde_json::Value::Array(
            texts
                .iter()
                .map(|t| serde_json::Value::String(t.text.clone()))
                .collect(),
        )
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&output).into_diagnostic()?
    );
    Ok(())
}

pub fn output_census_json(census: &ShapeCensus) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(census).into_diagnostic()?
    );
    Ok(())
}

//! Text output formatter

use leafwalk_core::{ExtractedText, ShapeCensus};
use leafwalk_value::Shape;

pub fn output_texts(texts: &[ExtractedText], with_path: bool) {
    for found in texts {
        match (&found.path, with_path) {
            (Some(path), true) => println!("{}: {}", path, found.text),
            _ => println!("{}", found.text),
        }
    }
}

pub fn output_census(census: &ShapeCensus) {
    for shape in Shape::ALL {
        let count = census.count(shape);
        if count > 0 {
            println!("{:<14} {}", shape.as_str(), count);
        }
    }

    println!();
    println!(
        "{} values, {} strings ({} bytes), max depth {}",
        census.total(),
        census.text_leaves,
        census.text_bytes,
        census.max_depth
    );
}

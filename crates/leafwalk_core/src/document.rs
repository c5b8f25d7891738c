//! Document loading.
//!
//! Reads JSON and JSONC files into [`Value`]s.

use std::fs;
use std::path::Path;

use jsonc_parser::ParseOptions;
use leafwalk_value::{ObjectLayout, Value, from_json};
use tracing::debug;

use crate::LeafwalkError;

/// Deepest array/object nesting a document may have.
///
/// Parsing and walking both recurse once per level.
pub const MAX_NESTING: usize = 128;

/// Parses a JSON or JSONC document held in memory.
///
/// An empty document is [`Value::Unit`].
pub fn parse_document(content: &str, layout: ObjectLayout) -> Result<Value, LeafwalkError> {
    parse_at(Path::new("<memory>"), content, layout)
}

/// Loads a JSON or JSONC document from disk.
pub fn load_document(path: impl AsRef<Path>, layout: ObjectLayout) -> Result<Value, LeafwalkError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| LeafwalkError::io(path, e))?;

    let value = parse_at(path, &content, layout)?;
    debug!("Loaded document {} ({} bytes)", path.display(), content.len());
    Ok(value)
}

fn parse_at(path: &Path, content: &str, layout: ObjectLayout) -> Result<Value, LeafwalkError> {
    let depth = nesting_depth(content);
    if depth > MAX_NESTING {
        return Err(LeafwalkError::parse(
            path,
            format!("nesting depth {} exceeds the limit of {}", depth, MAX_NESTING),
        ));
    }

    let json = jsonc_parser::parse_to_serde_value(content, &ParseOptions::default())
        .map_err(|e| LeafwalkError::parse(path, e.to_string()))?;

    Ok(json.map_or(Value::Unit, |json| from_json(json, layout)))
}

/// Returns the deepest bracket nesting of a JSONC text.
///
/// Brackets inside strings and comments do not count. Malformed input is
/// left for the parser to reject.
fn nesting_depth(content: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                while let Some(c) = chars.next() {
                    match c {
                        '\\' => {
                            chars.next();
                        }
                        '"' => break,
                        _ => {}
                    }
                }
            }
            '/' if chars.peek() == Some(&'/') => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut star = false;
                for c in chars.by_ref() {
                    if star && c == '/' {
                        break;
                    }
                    star = c == '*';
                }
            }
            '[' | '{' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            ']' | '}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    deepest
}

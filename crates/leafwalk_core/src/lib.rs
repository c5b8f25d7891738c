//! # leafwalk_core
//!
//! Document discovery and text extraction engine for leafwalk.
//!
//! This crate provides:
//! - The `Extractor` orchestrator
//! - Configuration loading
//! - Parallel document discovery, streamed as a channel value
//! - A shape census visitor
//!
//! ## Example
//!
//! ```rust,ignore
//! use leafwalk_core::{Extractor, LeafwalkConfig};
//!
//! let config = LeafwalkConfig::from_file(".leafwalk.jsonc")?;
//! let extractor = Extractor::new(config);
//!
//! for found in extractor.extract_paths(&["data".into()]) {
//!     println!("{}", found.text);
//! }
//! ```

mod census;
mod config;
pub mod document;
mod error;
mod extract;
pub mod walker;

pub use census::ShapeCensus;
pub use config::LeafwalkConfig;
pub use document::{load_document, parse_document};
pub use error::LeafwalkError;
pub use extract::{ExtractedText, Extractor};
pub use walker::{DocumentWalker, LoadedDocument};

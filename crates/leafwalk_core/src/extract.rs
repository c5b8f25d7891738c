//! Extraction orchestrator.

use std::ops::ControlFlow;
use std::path::PathBuf;

use leafwalk_value::visitor::{VisitResult, Visitor, walk_record, walk_value};
use leafwalk_value::{Record, Value, collect_text};
use serde::Serialize;
use tracing::{debug, info_span};

use crate::LeafwalkConfig;
use crate::census::ShapeCensus;
use crate::walker::{DOCUMENT_RECORD, DocumentWalker};

/// A textual leaf and the document it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedText {
    /// Path of the source document, if the text came from one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// The text itself.
    pub text: String,
}

/// Runs walks over in-memory values and over documents on disk.
#[derive(Debug, Clone)]
pub struct Extractor {
    config: LeafwalkConfig,
    walker: DocumentWalker,
}

impl Extractor {
    /// Creates a new extractor.
    pub fn new(config: LeafwalkConfig) -> Self {
        let walker = DocumentWalker::new(&config);
        Self { config, walker }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &LeafwalkConfig {
        &self.config
    }

    /// Returns every textual leaf of `value` in traversal order.
    pub fn extract(&self, value: &Value) -> Vec<String> {
        collect_text(value)
    }

    /// Streams the documents found under `paths` as a channel value.
    ///
    /// Walks over the returned value block until discovery has finished.
    pub fn documents(&self, paths: &[PathBuf]) -> Value {
        Value::from(self.walker.stream(paths))
    }

    /// Returns every textual leaf of the documents found under `paths`,
    /// tagged with the document path.
    ///
    /// Documents arrive in sorted path order.
    pub fn extract_paths(&self, paths: &[PathBuf]) -> Vec<ExtractedText> {
        let _span = info_span!("extract", paths = paths.len()).entered();

        let mut collector = DocumentTexts::default();
        let _ = walk_value(&mut collector, &self.documents(paths));

        debug!(
            "Extracted {} texts from {} documents",
            collector.texts.len(),
            collector.documents
        );
        collector.texts
    }

    /// Returns the shape census of `value`.
    pub fn census(&self, value: &Value) -> ShapeCensus {
        ShapeCensus::of(value)
    }

    /// Returns the combined shape census of the documents under `paths`.
    ///
    /// Only document contents are counted, not the stream around them.
    pub fn census_paths(&self, paths: &[PathBuf]) -> ShapeCensus {
        let _span = info_span!("census", paths = paths.len()).entered();

        let mut census = ShapeCensus::new();
        if let Value::Channel(channel) = self.documents(paths) {
            for document in channel.iter() {
                census.record(document_body(&document).unwrap_or(&document));
            }
        }
        census
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(LeafwalkConfig::default())
    }
}

/// Returns the `document` field of a streamed document record.
fn document_body(value: &Value) -> Option<&Value> {
    match value {
        Value::Record(record) if is_document(record) => record.get("document"),
        _ => None,
    }
}

fn is_document(record: &Record) -> bool {
    record.name.as_deref() == Some(DOCUMENT_RECORD)
}

/// Collects texts from a document stream, attributing each to its path.
#[derive(Default)]
struct DocumentTexts {
    current: Option<String>,
    documents: usize,
    texts: Vec<ExtractedText>,
}

impl Visitor for DocumentTexts {
    fn visit_record(&mut self, record: &Record) -> VisitResult {
        if !is_document(record) {
            return walk_record(self, record);
        }

        self.documents += 1;
        self.current = record.get("path").and_then(Value::as_text).map(String::from);
        let result = match record.get("document") {
            Some(body) => walk_value(self, body),
            None => ControlFlow::Continue(()),
        };
        self.current = None;
        result
    }

    fn visit_text(&mut self, text: &str) -> VisitResult {
        self.texts.push(ExtractedText {
            path: self.current.clone(),
            text: text.to_string(),
        });
        ControlFlow::Continue(())
    }
}

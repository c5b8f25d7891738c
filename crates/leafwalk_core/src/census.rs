//! Shape census.
//!
//! Counts every value a walk dispatches, grouped by [`Shape`].

use std::collections::BTreeMap;
use std::ops::ControlFlow;

use leafwalk_value::visitor::{VisitResult, Visitor, walk_value};
use leafwalk_value::{Shape, Value};
use serde::Serialize;

/// Per-shape statistics gathered from one or more walks.
///
/// Channels are drained and functions invoked while counting, exactly as
/// in a text walk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeCensus {
    /// Number of dispatched values per shape.
    pub counts: BTreeMap<Shape, usize>,

    /// Number of textual leaves.
    pub text_leaves: usize,

    /// Total byte length of all textual leaves.
    pub text_bytes: usize,

    /// Deepest nesting reached. The root is at depth 1.
    pub max_depth: usize,

    #[serde(skip)]
    depth: usize,
}

impl ShapeCensus {
    /// Creates an empty census.
    pub fn new() -> Self {
        Self::default()
    }

    /// Walks `value` and returns its census.
    pub fn of(value: &Value) -> Self {
        let mut census = Self::new();
        census.record(value);
        census
    }

    /// Walks `value`, adding to the existing counts.
    pub fn record(&mut self, value: &Value) {
        let _ = walk_value(self, value);
    }

    /// Number of dispatched values of `shape`.
    pub fn count(&self, shape: Shape) -> usize {
        self.counts.get(&shape).copied().unwrap_or(0)
    }

    /// Number of dispatched values of any shape.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Adds the counts of `other` to this census.
    pub fn merge(&mut self, other: &ShapeCensus) {
        for (shape, count) in &other.counts {
            *self.counts.entry(*shape).or_default() += count;
        }
        self.text_leaves += other.text_leaves;
        self.text_bytes += other.text_bytes;
        self.max_depth = self.max_depth.max(other.max_depth);
    }
}

impl Visitor for ShapeCensus {
    fn enter_value(&mut self, _value: &Value, shape: Shape) -> VisitResult {
        *self.counts.entry(shape).or_default() += 1;
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        ControlFlow::Continue(())
    }

    fn exit_value(&mut self, _value: &Value, _shape: Shape) -> VisitResult {
        self.depth -= 1;
        ControlFlow::Continue(())
    }

    fn visit_text(&mut self, text: &str) -> VisitResult {
        self.text_leaves += 1;
        self.text_bytes += text.len();
        ControlFlow::Continue(())
    }
}

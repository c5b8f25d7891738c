//! Visitor pattern for value traversal.
//!
//! This module provides the shape dispatcher and the per-shape traversal
//! functions.
//!
//! # Overview
//!
//! - [`Visitor`] - Read-only traversal trait
//! - [`walk_value`] - Dispatch function for shape-specific visitors
//! - [`walk`] - Calls a callback for every textual leaf
//!
//! # Traversal order
//!
//! | Shape | Order |
//! |-------|-------|
//! | Record | declared field order |
//! | Pointer | single dereference, nil skipped |
//! | Sequence, FixedSequence | ascending index |
//! | Mapping | values only, unspecified order |
//! | Channel | receipt order, until closed |
//! | Function | one call, positional result order |
//!
//! # Examples
//!
//! ## Collecting Text Content
//!
//! ```rust
//! use leafwalk_value::{Record, Value};
//! use leafwalk_value::visitor::collect_text;
//!
//! let person = Value::from(
//!     Record::named("Person")
//!         .field("Name", "Scott")
//!         .field("Profile", Record::named("Profile").field("Age", 27).field("City", "Leeds")),
//! );
//!
//! assert_eq!(collect_text(&person), vec!["Scott", "Leeds"]);
//! ```
//!
//! ## Early Termination
//!
//! ```rust
//! use leafwalk_value::Value;
//! use leafwalk_value::visitor::{Visitor, VisitResult, walk_value};
//! use std::ops::ControlFlow;
//!
//! struct FirstText {
//!     found: Option<String>,
//! }
//!
//! impl Visitor for FirstText {
//!     fn visit_text(&mut self, text: &str) -> VisitResult {
//!         self.found = Some(text.to_string());
//!         ControlFlow::Break(()) // Stop traversal
//!     }
//! }
//!
//! let mut finder = FirstText { found: None };
//! let _ = walk_value(&mut finder, &Value::from(vec!["a", "b"]));
//! assert_eq!(finder.found.as_deref(), Some("a"));
//! ```

mod visit;
mod walk;

pub use visit::{VisitResult, Visitor};
pub use walk::{
    collect_text, walk, walk_channel, walk_elements, walk_function, walk_mapping, walk_pointer,
    walk_record, walk_value,
};

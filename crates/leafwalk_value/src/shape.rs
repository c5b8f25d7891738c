//! Shape definitions.
//!
//! A [`Shape`] is the structural category a [`Value`](crate::Value) falls
//! into at dispatch time. The set is closed: adding a shape means adding a
//! variant here and a handler in the dispatcher.

use serde::{Deserialize, Serialize};

/// Runtime structural category of a value.
///
/// Exactly one shape applies to any value when it is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Shape {
    /// Character data. The only shape that produces output.
    Textual,
    /// Fixed, ordered set of named heterogeneous fields.
    Record,
    /// Single level of indirection, possibly nil.
    Pointer,
    /// Variable-length ordered list.
    Sequence,
    /// Fixed-length ordered array.
    FixedSequence,
    /// Unordered key to value association.
    Mapping,
    /// Closable, sequential data source.
    Channel,
    /// Zero-argument function returning any number of values.
    Function,
    /// Anything else. Skipped.
    Other,
}

impl Shape {
    /// Every shape, in declaration order.
    pub const ALL: [Shape; 9] = [
        Shape::Textual,
        Shape::Record,
        Shape::Pointer,
        Shape::Sequence,
        Shape::FixedSequence,
        Shape::Mapping,
        Shape::Channel,
        Shape::Function,
        Shape::Other,
    ];

    /// Returns true if this shape is a traversal leaf.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Shape::Textual)
    }

    /// Returns true if walking this shape may recurse into sub-values.
    #[inline]
    pub const fn is_container(&self) -> bool {
        matches!(
            self,
            Shape::Record
                | Shape::Pointer
                | Shape::Sequence
                | Shape::FixedSequence
                | Shape::Mapping
                | Shape::Channel
                | Shape::Function
        )
    }

    /// Returns true if walking this shape blocks on or calls into caller code.
    #[inline]
    pub const fn is_effectful(&self) -> bool {
        matches!(self, Shape::Channel | Shape::Function)
    }

    /// Returns the canonical name, matching the serde representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Shape::Textual => "Textual",
            Shape::Record => "Record",
            Shape::Pointer => "Pointer",
            Shape::Sequence => "Sequence",
            Shape::FixedSequence => "FixedSequence",
            Shape::Mapping => "Mapping",
            Shape::Channel => "Channel",
            Shape::Function => "Function",
            Shape::Other => "Other",
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Visitor trait for traversing values.
//!
//! Each `visit_*` method has a default implementation that performs the
//! standard traversal for its shape, so a visitor only overrides the shapes
//! it cares about.
//!
//! # Example
//!
//! ```rust
//! use leafwalk_value::{Record, Value};
//! use leafwalk_value::visitor::{Visitor, VisitResult, walk_value};
//! use std::ops::ControlFlow;
//!
//! /// Counts textual leaves.
//! struct LeafCounter {
//!     count: usize,
//! }
//!
//! impl Visitor for LeafCounter {
//!     fn visit_text(&mut self, _text: &str) -> VisitResult {
//!         self.count += 1;
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let value = Value::from(Record::new().field("Name", "Scott").field("City", "Leeds"));
//! let mut counter = LeafCounter { count: 0 };
//! walk_value(&mut counter, &value);
//! assert_eq!(counter.count, 2);
//! ```

use std::ops::ControlFlow;

use crate::{Channel, Function, Mapping, Record, Shape, Value};

use super::walk::{
    walk_channel, walk_elements, walk_function, walk_mapping, walk_pointer, walk_record, walk_value,
};

/// Result type for visitor methods to control traversal.
///
/// - `ControlFlow::Continue(())` - keep walking
/// - `ControlFlow::Break(())` - stop the whole traversal
pub type VisitResult = ControlFlow<()>;

/// Visitor trait for read-only traversal of [`Value`]s.
///
/// # Control Flow
///
/// Return `ControlFlow::Break(())` from any method to stop early. A break
/// inside a channel stops receiving; items still queued stay in the channel.
pub trait Visitor: Sized {
    /// Called before a value is dispatched.
    #[inline]
    fn enter_value(&mut self, _value: &Value, _shape: Shape) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called after a value and everything reachable from it was visited.
    #[inline]
    fn exit_value(&mut self, _value: &Value, _shape: Shape) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visits any value by dispatching on its shape.
    ///
    /// Override this if you need custom dispatch logic.
    #[inline]
    fn visit_value(&mut self, value: &Value) -> VisitResult {
        walk_value(self, value)
    }

    /// Visit a textual leaf.
    fn visit_text(&mut self, _text: &str) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visit a record. Fields are walked in declaration order.
    fn visit_record(&mut self, record: &Record) -> VisitResult {
        walk_record(self, record)
    }

    /// Visit a pointer. `None` is a nil pointer.
    fn visit_pointer(&mut self, target: Option<&Value>) -> VisitResult {
        walk_pointer(self, target)
    }

    /// Visit a variable-length sequence.
    fn visit_sequence(&mut self, items: &[Value]) -> VisitResult {
        walk_elements(self, items)
    }

    /// Visit a fixed-length sequence.
    fn visit_fixed_sequence(&mut self, items: &[Value]) -> VisitResult {
        walk_elements(self, items)
    }

    /// Visit a mapping. Only values are walked.
    fn visit_mapping(&mut self, mapping: &Mapping) -> VisitResult {
        walk_mapping(self, mapping)
    }

    /// Visit a channel. Blocks until the producer closes it.
    fn visit_channel(&mut self, channel: &Channel) -> VisitResult {
        walk_channel(self, channel)
    }

    /// Visit a zero-argument function. It is invoked exactly once.
    fn visit_function(&mut self, function: &Function) -> VisitResult {
        walk_function(self, function)
    }

    /// Visit a value of any other shape.
    fn visit_other(&mut self, _value: &Value) -> VisitResult {
        ControlFlow::Continue(()) // skipped
    }
}

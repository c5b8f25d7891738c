//! Walk functions for value traversal.
//!
//! These functions hold the traversal logic for every shape. They are used
//! by the default implementations in the `Visitor` trait and can be called
//! from overriding methods to resume the standard traversal.

use std::ops::ControlFlow;

use tracing::{debug, trace};

use crate::{Channel, Function, Mapping, Record, Value};

use super::visit::{VisitResult, Visitor};

/// Walks a value by dispatching to the method for its shape.
///
/// This function:
/// 1. Classifies the value and calls `enter_value`
/// 2. Dispatches to the matching `visit_*` method
/// 3. Calls `exit_value`
///
/// Values of an unrecognised shape go to `visit_other`, which skips them
/// by default.
pub fn walk_value<V>(visitor: &mut V, value: &Value) -> VisitResult
where
    V: Visitor,
{
    let shape = value.shape();
    trace!(%shape, "dispatch");

    visitor.enter_value(value, shape)?;

    let result = match value {
        Value::Text(text) => visitor.visit_text(text),
        Value::Record(record) => visitor.visit_record(record),
        Value::Pointer(target) => visitor.visit_pointer(target.as_deref()),
        Value::Sequence(items) => visitor.visit_sequence(items),
        Value::FixedSequence(items) => visitor.visit_fixed_sequence(items),
        Value::Mapping(mapping) => visitor.visit_mapping(mapping),
        Value::Channel(channel) => visitor.visit_channel(channel),
        Value::Function(function) if function.is_nullary() => visitor.visit_function(function),
        Value::Function(_) | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Unit => {
            visitor.visit_other(value)
        }
    };

    result?;

    visitor.exit_value(value, shape)
}

/// Walks every field of a record in declaration order.
#[inline]
pub fn walk_record<V>(visitor: &mut V, record: &Record) -> VisitResult
where
    V: Visitor,
{
    for field in &record.fields {
        walk_value(visitor, &field.value)?;
    }
    ControlFlow::Continue(())
}

/// Walks the target of a pointer. A nil pointer is a no-op.
#[inline]
pub fn walk_pointer<V>(visitor: &mut V, target: Option<&Value>) -> VisitResult
where
    V: Visitor,
{
    match target {
        Some(value) => walk_value(visitor, value),
        None => ControlFlow::Continue(()),
    }
}

/// Walks elements by ascending index.
#[inline]
pub fn walk_elements<V>(visitor: &mut V, items: &[Value]) -> VisitResult
where
    V: Visitor,
{
    for item in items {
        walk_value(visitor, item)?;
    }
    ControlFlow::Continue(())
}

/// Walks the values of a mapping in unspecified order. Keys are not walked.
#[inline]
pub fn walk_mapping<V>(visitor: &mut V, mapping: &Mapping) -> VisitResult
where
    V: Visitor,
{
    for value in mapping.values() {
        walk_value(visitor, value)?;
    }
    ControlFlow::Continue(())
}

/// Drains a channel, walking each item in receipt order.
///
/// Blocks on every receive and returns only once the producer side has
/// closed, or when the visitor breaks.
pub fn walk_channel<V>(visitor: &mut V, channel: &Channel) -> VisitResult
where
    V: Visitor,
{
    let mut received = 0usize;
    while let Some(item) = channel.recv() {
        received += 1;
        walk_value(visitor, &item)?;
    }
    debug!(received, "channel closed");
    ControlFlow::Continue(())
}

/// Invokes a zero-argument function once and walks its results in
/// positional order.
///
/// A function that requires arguments is not called.
pub fn walk_function<V>(visitor: &mut V, function: &Function) -> VisitResult
where
    V: Visitor,
{
    let Some(results) = function.invoke() else {
        return ControlFlow::Continue(());
    };
    debug!(results = results.len(), "invoked function");
    walk_elements(visitor, &results)
}

/// Sink that forwards every textual leaf to a callback.
struct TextSink<F> {
    consume: F,
}

impl<F> Visitor for TextSink<F>
where
    F: FnMut(&str),
{
    #[inline]
    fn visit_text(&mut self, text: &str) -> VisitResult {
        (self.consume)(text);
        ControlFlow::Continue(())
    }
}

/// Calls `consume` once for every textual leaf reachable from `value`, in
/// traversal order.
///
/// Never fails: values of unsupported shape are skipped. Channels are
/// drained until closed and zero-argument functions are invoked once, so
/// this call blocks for as long as a reachable channel stays open.
///
/// # Example
///
/// ```rust
/// use leafwalk_value::{Record, Value, walk};
///
/// let value = Value::from(Record::new().field("Name", "Scott").field("Age", 27));
///
/// let mut got = Vec::new();
/// walk(&value, |text| got.push(text.to_string()));
/// assert_eq!(got, vec!["Scott"]);
/// ```
pub fn walk<F>(value: &Value, consume: F)
where
    F: FnMut(&str),
{
    let mut sink = TextSink { consume };
    let _ = walk_value(&mut sink, value);
}

/// Collects every textual leaf reachable from `value`.
pub fn collect_text(value: &Value) -> Vec<String> {
    let mut texts = Vec::new();
    walk(value, |text| texts.push(text.to_string()));
    texts
}

//! Value definition.
//!
//! The runtime datum the walker inspects. Its static type is always
//! [`Value`]; its structure is only known by asking for its [`Shape`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::{Channel, Function, MapKey, Mapping, Record, Shape};

/// A runtime value of arbitrary shape.
///
/// # Example
///
/// ```rust
/// use leafwalk_value::{Record, Shape, Value};
///
/// let person = Value::from(
///     Record::named("Person")
///         .field("Name", "Scott")
///         .field("Profile", Record::named("Profile").field("Age", 27).field("City", "Leeds")),
/// );
///
/// assert_eq!(person.shape(), Shape::Record);
/// assert_eq!(Value::pointer(person).shape(), Shape::Pointer);
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Character data.
    Text(String),

    /// Boolean scalar.
    Bool(bool),

    /// Integer scalar.
    Int(i64),

    /// Floating point scalar.
    Float(f64),

    /// Absence of a value.
    #[default]
    Unit,

    /// Named fields in declaration order.
    Record(Record),

    /// One level of indirection. `None` is a nil pointer.
    Pointer(Option<Arc<Value>>),

    /// Variable-length list.
    Sequence(Vec<Value>),

    /// Fixed-length array.
    FixedSequence(Box<[Value]>),

    /// Unordered association.
    Mapping(Mapping),

    /// Closable producer channel.
    Channel(Channel),

    /// Callable returning zero or more values.
    Function(Function),
}

impl Value {
    /// Creates a text value.
    #[inline]
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    /// Creates a pointer to `value`.
    pub fn pointer(value: impl Into<Value>) -> Self {
        Value::Pointer(Some(Arc::new(value.into())))
    }

    /// Creates a nil pointer.
    #[inline]
    pub const fn nil() -> Self {
        Value::Pointer(None)
    }

    /// Creates a fixed-length array from `items`.
    pub fn fixed<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Value::FixedSequence(items.into_iter().map(Into::into).collect())
    }

    /// Classifies this value.
    ///
    /// Scalars other than text, and functions that take arguments, are
    /// [`Shape::Other`].
    pub fn shape(&self) -> Shape {
        match self {
            Value::Text(_) => Shape::Textual,
            Value::Record(_) => Shape::Record,
            Value::Pointer(_) => Shape::Pointer,
            Value::Sequence(_) => Shape::Sequence,
            Value::FixedSequence(_) => Shape::FixedSequence,
            Value::Mapping(_) => Shape::Mapping,
            Value::Channel(_) => Shape::Channel,
            Value::Function(f) if f.is_nullary() => Shape::Function,
            Value::Function(_) | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Unit => {
                Shape::Other
            }
        }
    }

    /// Number of fields, elements, or entries. Zero for everything else.
    pub fn len(&self) -> usize {
        match self {
            Value::Record(record) => record.len(),
            Value::Sequence(items) => items.len(),
            Value::FixedSequence(items) => items.len(),
            Value::Mapping(mapping) => mapping.len(),
            _ => 0,
        }
    }

    /// Returns true if [`len`](Self::len) is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the field or element at `index`.
    ///
    /// Mappings have no positional access and always return `None`.
    pub fn get(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Record(record) => record.field_at(index).map(|field| &field.value),
            Value::Sequence(items) => items.get(index),
            Value::FixedSequence(items) => items.get(index),
            _ => None,
        }
    }

    /// Follows one level of indirection.
    ///
    /// Returns `None` for nil pointers and for values that are not pointers.
    pub fn deref(&self) -> Option<&Value> {
        match self {
            Value::Pointer(target) => target.as_deref(),
            _ => None,
        }
    }

    /// Returns the text if this is a textual value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Blocks for the next item if this is a channel.
    ///
    /// Returns `None` for closed channels and for non-channel values.
    pub fn recv(&self) -> Option<Value> {
        match self {
            Value::Channel(channel) => channel.recv(),
            _ => None,
        }
    }

    /// Invokes a zero-argument function once and returns its results.
    ///
    /// Returns `None` for functions with parameters and for non-function values.
    pub fn invoke(&self) -> Option<Vec<Value>> {
        match self {
            Value::Function(f) => f.invoke(),
            _ => None,
        }
    }

    /// Returns true if this is a nil pointer.
    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Pointer(None))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Unit
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Value::Mapping(value)
    }
}

impl From<Channel> for Value {
    fn from(value: Channel) -> Self {
        Value::Channel(value)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Value::Function(value)
    }
}

impl From<Arc<Value>> for Value {
    fn from(value: Arc<Value>) -> Self {
        Value::Pointer(Some(value))
    }
}

impl<T: Into<Value>> From<Box<T>> for Value {
    fn from(value: Box<T>) -> Self {
        Value::pointer(*value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        Value::Pointer(value.map(|v| Arc::new(v.into())))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Sequence(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(value: [T; N]) -> Self {
        Value::fixed(value)
    }
}

impl<K: Into<MapKey>, V: Into<Value>> From<HashMap<K, V>> for Value {
    fn from(value: HashMap<K, V>) -> Self {
        Value::Mapping(value.into_iter().collect())
    }
}

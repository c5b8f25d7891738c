//! Record values.

use crate::Value;

/// A named field of a [`Record`].
#[derive(Debug, Clone)]
pub struct Field {
    /// Field name.
    pub name: String,

    /// Field value.
    pub value: Value,
}

impl Field {
    /// Creates a new field.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A fixed set of named, heterogeneous fields in declaration order.
///
/// # Example
///
/// ```rust
/// use leafwalk_value::{Record, Value};
///
/// let person = Record::named("Person")
///     .field("Name", "Scott")
///     .field("Age", 27);
///
/// assert_eq!(person.len(), 2);
/// assert_eq!(person.get("Name").and_then(Value::as_text), Some("Scott"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Record {
    /// Type name, if the record has one.
    pub name: Option<String>,

    /// Fields in declaration order.
    pub fields: Vec<Field>,
}

impl Record {
    /// Creates an anonymous, empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty record with a type name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            fields: Vec::new(),
        }
    }

    /// Appends a field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push(Field::new(name, value));
        self
    }

    /// Appends a field in place.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.push(Field::new(name, value));
    }

    /// Returns the value of the first field called `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }

    /// Returns the field at `index` in declaration order.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    /// Number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over field values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.iter().map(|field| &field.value)
    }
}

impl<N, V> FromIterator<(N, V)> for Record
where
    N: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            name: None,
            fields: iter
                .into_iter()
                .map(|(name, value)| Field::new(name, value))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_order() {
        let record = Record::new().field("b", "2").field("a", "1");

        let names: Vec<_> = record.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_get_by_name() {
        let record = Record::named("Profile").field("Age", 27).field("City", "Leeds");

        assert_eq!(record.name.as_deref(), Some("Profile"));
        assert_eq!(record.get("City").and_then(Value::as_text), Some("Leeds"));
        assert!(record.get("Missing").is_none());
    }

    #[test]
    fn test_field_at() {
        let record = Record::new().field("Name", "Scott");

        assert_eq!(record.field_at(0).map(|f| f.name.as_str()), Some("Name"));
        assert!(record.field_at(1).is_none());
    }

    #[test]
    fn test_from_iter() {
        let record: Record = [("x", "1"), ("y", "2")].into_iter().collect();

        assert_eq!(record.len(), 2);
        assert!(record.name.is_none());
    }
}

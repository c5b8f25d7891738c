//! Conversion from `serde_json` documents.

use serde::{Deserialize, Serialize};

use crate::{Mapping, Record, Value};

/// How JSON objects are represented after conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectLayout {
    /// Objects become anonymous [`Record`]s, keeping document key order.
    #[default]
    Record,
    /// Objects become [`Mapping`]s keyed by property name.
    Mapping,
}

/// Converts a JSON document into a [`Value`].
///
/// - strings become text
/// - integral numbers become `Int`, all other numbers `Float`
/// - arrays become sequences
/// - objects follow `layout`
/// - `null` becomes `Unit`
pub fn from_json(json: serde_json::Value, layout: ObjectLayout) -> Value {
    match json {
        serde_json::Value::Null => Value::Unit,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        serde_json::Value::String(s) => Value::Text(s),
        serde_json::Value::Array(items) => Value::Sequence(
            items
                .into_iter()
                .map(|item| from_json(item, layout))
                .collect(),
        ),
        serde_json::Value::Object(props) => match layout {
            ObjectLayout::Record => Value::Record(
                props
                    .into_iter()
                    .map(|(k, v)| (k, from_json(v, layout)))
                    .collect::<Record>(),
            ),
            ObjectLayout::Mapping => Value::Mapping(
                props
                    .into_iter()
                    .map(|(k, v)| (k, from_json(v, layout)))
                    .collect::<Mapping>(),
            ),
        },
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        from_json(json, ObjectLayout::default())
    }
}

//! # leafwalk_value
//!
//! Runtime value model and shape-directed traversal for leafwalk.
//!
//! A [`Value`] is a datum whose structure is only known at runtime. Every
//! value classifies into exactly one [`Shape`], and the [`visitor`] module
//! walks values by dispatching on that shape.
//!
//! ## Architecture
//!
//! - Values are a sealed enum; adding a shape is a compile-time change
//! - Pointers share their target through `Arc`, so graphs built here are acyclic
//! - Channels wrap `crossbeam-channel` receivers and are drained on walk
//! - Functions are invoked once and their results walked in order
//!
//! ## Example
//!
//! ```rust
//! use leafwalk_value::{Record, Value, walk};
//!
//! let profiles = Value::from(vec![
//!     Record::named("Profile").field("Age", 27).field("City", "Leeds"),
//!     Record::named("Profile").field("Age", 55).field("City", "Manchester"),
//! ]);
//!
//! let mut cities = Vec::new();
//! walk(&profiles, |city| cities.push(city.to_string()));
//! assert_eq!(cities, vec!["Leeds", "Manchester"]);
//! ```

mod channel;
mod function;
mod json;
mod mapping;
mod record;
mod shape;
mod value;
pub mod visitor;

pub use channel::{Channel, Producer};
pub use function::Function;
pub use json::{ObjectLayout, from_json};
pub use mapping::{MapKey, Mapping};
pub use record::{Field, Record};
pub use shape::Shape;
pub use value::Value;

// Re-export commonly used visitor items for convenience
pub use visitor::{VisitResult, Visitor, collect_text, walk};

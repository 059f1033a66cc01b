//! # jsonvalue
//!
//! A dynamically-typed document value: one enum covering null, booleans,
//! 32-bit integers, doubles, strings, arrays and objects.
//!
//! Typed access is strict. `as_int` on a double panics instead of converting,
//! reading a missing key panics instead of returning a default. Use the
//! `try_*` accessors or [`Value::get`] when the shape of the data is not known
//! up front.
//!
//! ```
//! use jsonvalue::Value;
//!
//! let mut doc = Value::new();
//! doc.to_object();
//! doc["a"] = true.into();
//! doc["b"].to_array();
//! doc["b"].append(1);
//! doc["b"].append(2);
//! doc["b"].append("x");
//!
//! assert!(doc["a"].as_bool());
//! assert_eq!(doc["b"][1].as_int(), 2);
//! assert_eq!(doc["b"][2].as_string(), "x");
//!
//! doc.release();
//! assert!(doc.is_null());
//! ```
mod error;
mod impls;
mod value;

pub use error::Error;
pub use value::{Kind, Map, Value, ValueIndex};

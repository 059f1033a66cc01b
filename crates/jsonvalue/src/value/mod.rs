mod access;
mod convert;
mod index;
mod kind;
mod partial_eq;

use std::{collections::BTreeMap, mem};

pub use index::ValueIndex;
pub use kind::Kind;
use log::trace;

/// Key-ordered storage of an object value.
pub type Map = BTreeMap<String, Value>;

/// A dynamically-typed document value.
///
/// Containers own their children, so a value is the root of a tree that is
/// freed as a whole when it is dropped or overwritten. [`Value::release`]
/// performs the same teardown eagerly and leaves `Null` behind.
///
/// Equality is structural: arrays compare element-wise in order, objects by
/// their key sets and values. Two independently built containers with the same
/// content are equal.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i32),
    Double(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

const _: () = const {
    assert!(std::mem::size_of::<Value>() <= 32);
};

impl Value {
    /// Create a `Null` value.
    #[must_use]
    pub const fn new() -> Self {
        Value::Null
    }

    /// Create a value of the given kind holding that kind's default payload:
    /// `false`, `0`, `0.0`, an empty string, an empty array or an empty object.
    #[must_use]
    pub fn with_kind(kind: Kind) -> Self {
        match kind {
            Kind::Null => Value::Null,
            Kind::Bool => Value::Bool(false),
            Kind::Integer => Value::Integer(0),
            Kind::Double => Value::Double(0.0),
            Kind::String => Value::String(String::new()),
            Kind::Array => Value::Array(Vec::new()),
            Kind::Object => Value::Object(Map::new()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Integer(_) => Kind::Integer,
            Value::Double(_) => Kind::Double,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }
    #[must_use]
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Integer(_))
    }
    #[must_use]
    pub fn is_double(&self) -> bool {
        matches!(self, Value::Double(_))
    }
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Turn this value into an empty array unless it already is an array.
    ///
    /// An existing array keeps its elements. Any other content is released
    /// first.
    pub fn to_array(&mut self) {
        if self.is_array() {
            return;
        }
        self.retype(Kind::Array);
    }

    /// Turn this value into an empty object unless it already is an object.
    ///
    /// An existing object keeps its entries. Any other content is released
    /// first.
    pub fn to_object(&mut self) {
        if self.is_object() {
            return;
        }
        self.retype(Kind::Object);
    }

    fn retype(&mut self, kind: Kind) {
        if !self.is_null() {
            trace!("Discarding {} value to re-type it as {kind}", self.kind());
        }
        self.release();
        *self = Value::with_kind(kind);
    }

    /// Release all storage owned by this value and reset it to `Null`.
    ///
    /// Children are torn down through an explicit work list, so arbitrarily
    /// deep trees do not exhaust the call stack. Returns the number of values
    /// released, including this one; releasing `Null` is a no-op returning 0.
    pub fn release(&mut self) -> usize {
        if self.is_null() {
            return 0;
        }
        let mut pending = vec![mem::take(self)];
        let mut released = 0;
        while let Some(mut value) = pending.pop() {
            released += 1;
            drain_children(&mut value, &mut pending);
        }
        if released > 1 {
            trace!("Released {released} values");
        }
        released
    }
}

/// Move the direct children of a container onto `pending`, leaving it empty.
fn drain_children(value: &mut Value, pending: &mut Vec<Value>) {
    match value {
        Value::Array(items) => pending.append(items),
        Value::Object(entries) => pending.extend(mem::take(entries).into_values()),
        _ => {}
    }
}

// Dropping nested containers through the generated glue recurses once per
// level. Children are emptied out first so every drop below stays shallow.
impl Drop for Value {
    fn drop(&mut self) {
        if !matches!(self, Value::Array(_) | Value::Object(_)) {
            return;
        }
        let mut pending = Vec::new();
        drain_children(self, &mut pending);
        while let Some(mut value) = pending.pop() {
            drain_children(&mut value, &mut pending);
        }
    }
}

use std::ops;

use super::{access::or_violation, Kind, Map, Value};
use crate::{error::violation, Error};

/// A type that can index into a [`Value`]: `usize` for arrays and string keys
/// for objects.
///
/// Read lookups are strict. Mutable slot access grows arrays and inserts
/// missing object keys as `Null`.
///
/// This trait is sealed and cannot be implemented outside of this crate.
pub trait ValueIndex: private::Sealed {
    #[doc(hidden)]
    fn lookup<'v>(&self, value: &'v Value) -> Result<&'v Value, Error>;

    #[doc(hidden)]
    fn lookup_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value, Error>;

    /// Return the slot for this index, creating it if needed.
    #[doc(hidden)]
    fn slot<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value, Error>;
}

impl ValueIndex for usize {
    fn lookup<'v>(&self, value: &'v Value) -> Result<&'v Value, Error> {
        match value {
            Value::Array(items) => items
                .get(*self)
                .ok_or_else(|| Error::index_out_of_bounds(*self, items.len())),
            other => Err(Error::kind_mismatch(Kind::Array, other.kind())),
        }
    }

    fn lookup_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value, Error> {
        match value {
            Value::Array(items) => {
                let len = items.len();
                items
                    .get_mut(*self)
                    .ok_or_else(|| Error::index_out_of_bounds(*self, len))
            }
            other => Err(Error::kind_mismatch(Kind::Array, other.kind())),
        }
    }

    fn slot<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value, Error> {
        match value {
            Value::Array(items) => {
                if *self >= items.len() {
                    let Some(new_len) = self.checked_add(1) else {
                        return Err(Error::index_out_of_bounds(*self, items.len()));
                    };
                    items.resize_with(new_len, Value::default);
                }
                Ok(&mut items[*self])
            }
            other => Err(Error::kind_mismatch(Kind::Array, other.kind())),
        }
    }
}

impl ValueIndex for str {
    fn lookup<'v>(&self, value: &'v Value) -> Result<&'v Value, Error> {
        match value {
            Value::Object(entries) => entries.get(self).ok_or_else(|| Error::missing_key(self)),
            other => Err(Error::kind_mismatch(Kind::Object, other.kind())),
        }
    }

    fn lookup_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value, Error> {
        match value {
            Value::Object(entries) => entries
                .get_mut(self)
                .ok_or_else(|| Error::missing_key(self)),
            other => Err(Error::kind_mismatch(Kind::Object, other.kind())),
        }
    }

    fn slot<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value, Error> {
        match value {
            Value::Object(entries) => Ok(entries.entry(self.to_owned()).or_default()),
            other => Err(Error::kind_mismatch(Kind::Object, other.kind())),
        }
    }
}

impl ValueIndex for String {
    fn lookup<'v>(&self, value: &'v Value) -> Result<&'v Value, Error> {
        self.as_str().lookup(value)
    }

    fn lookup_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value, Error> {
        self.as_str().lookup_mut(value)
    }

    fn slot<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value, Error> {
        self.as_str().slot(value)
    }
}

impl<T> ValueIndex for &T
where
    T: ?Sized + ValueIndex,
{
    fn lookup<'v>(&self, value: &'v Value) -> Result<&'v Value, Error> {
        (**self).lookup(value)
    }

    fn lookup_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value, Error> {
        (**self).lookup_mut(value)
    }

    fn slot<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value, Error> {
        (**self).slot(value)
    }
}

#[allow(unreachable_pub)]
mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T> Sealed for &T where T: ?Sized + Sealed {}
}

/// Strict read access: `value[2]` or `value["key"]`.
///
/// Panics on a kind mismatch, an index past the end or a missing key.
impl<I: ValueIndex> ops::Index<I> for Value {
    type Output = Value;

    #[track_caller]
    fn index(&self, index: I) -> &Value {
        or_violation(index.lookup(self))
    }
}

/// Write access: `value[2] = ...` grows the array with `Null` padding and
/// `value["key"] = ...` inserts the key if it is absent.
///
/// Panics on a kind mismatch.
impl<I: ValueIndex> ops::IndexMut<I> for Value {
    #[track_caller]
    fn index_mut(&mut self, index: I) -> &mut Value {
        or_violation(index.slot(self))
    }
}

impl Value {
    /// Look up an array element or an object entry without panicking.
    ///
    /// Returns `None` on a kind mismatch, an index past the end or a missing
    /// key.
    pub fn get<I: ValueIndex>(&self, index: I) -> Option<&Value> {
        index.lookup(self).ok()
    }

    /// Mutable counterpart of [`Value::get`]. Never grows the container.
    pub fn get_mut<I: ValueIndex>(&mut self, index: I) -> Option<&mut Value> {
        index.lookup_mut(self).ok()
    }

    /// Like [`Value::get`], but reports why the lookup failed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] if the value is not a container matching
    /// the index type, [`Error::IndexOutOfBounds`] or [`Error::MissingKey`]
    /// if the element does not exist.
    pub fn try_get<I: ValueIndex>(&self, index: I) -> Result<&Value, Error> {
        index.lookup(self)
    }

    /// Method form of `&value[idx]`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an array or `idx` is out of bounds.
    #[must_use]
    #[track_caller]
    pub fn at(&self, idx: usize) -> &Value {
        &self[idx]
    }

    /// Method form of `&mut value[idx]`: grows the array so that `idx` is its
    /// last position, padding with `Null`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an array.
    #[track_caller]
    pub fn at_mut(&mut self, idx: usize) -> &mut Value {
        &mut self[idx]
    }

    /// Push `value` at the end of the array.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an array.
    #[track_caller]
    pub fn append(&mut self, value: impl Into<Value>) {
        match self {
            Value::Array(items) => items.push(value.into()),
            other => violation(Error::kind_mismatch(Kind::Array, other.kind())),
        }
    }

    /// Insert an object entry, returning the previous value under `key`.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object.
    #[track_caller]
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.object_mut().insert(key.into(), value.into())
    }

    /// Remove an object entry.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object.
    #[track_caller]
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.object_mut().remove(key)
    }

    /// # Panics
    ///
    /// Panics if the value is not an object.
    #[must_use]
    #[track_caller]
    pub fn contains_key(&self, key: &str) -> bool {
        self.as_object().contains_key(key)
    }

    #[track_caller]
    fn object_mut(&mut self) -> &mut Map {
        match self {
            Value::Object(entries) => entries,
            other => violation(Error::kind_mismatch(Kind::Object, other.kind())),
        }
    }
}

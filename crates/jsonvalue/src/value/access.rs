use std::{collections::btree_map, mem};

use super::{Kind, Map, Value};
use crate::{error::violation, Error};

#[track_caller]
pub(super) fn or_violation<T>(result: Result<T, Error>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => violation(error),
    }
}

impl Value {
    /// Return the boolean payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a bool.
    #[must_use]
    #[track_caller]
    pub fn as_bool(&self) -> bool {
        or_violation(self.try_as_bool())
    }

    /// Return the integer payload. Doubles are not converted.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an integer.
    #[must_use]
    #[track_caller]
    pub fn as_int(&self) -> i32 {
        or_violation(self.try_as_int())
    }

    /// Return the double payload. Integers are not converted.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a double.
    #[must_use]
    #[track_caller]
    pub fn as_double(&self) -> f64 {
        or_violation(self.try_as_double())
    }

    /// Return a copy of the string payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a string.
    #[must_use]
    #[track_caller]
    pub fn as_string(&self) -> String {
        or_violation(self.try_as_str()).to_owned()
    }

    /// Borrow the string payload.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a string.
    #[must_use]
    #[track_caller]
    pub fn as_str(&self) -> &str {
        or_violation(self.try_as_str())
    }

    /// Borrow the elements of an array.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an array.
    #[must_use]
    #[track_caller]
    pub fn as_array(&self) -> &[Value] {
        or_violation(self.try_as_array())
    }

    /// Borrow the entries of an object.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object.
    #[must_use]
    #[track_caller]
    pub fn as_object(&self) -> &Map {
        or_violation(self.try_as_object())
    }

    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] if the value is not a bool.
    pub fn try_as_bool(&self) -> Result<bool, Error> {
        match self {
            Value::Bool(value) => Ok(*value),
            other => Err(Error::kind_mismatch(Kind::Bool, other.kind())),
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] if the value is not an integer.
    pub fn try_as_int(&self) -> Result<i32, Error> {
        match self {
            Value::Integer(value) => Ok(*value),
            other => Err(Error::kind_mismatch(Kind::Integer, other.kind())),
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] if the value is not a double.
    pub fn try_as_double(&self) -> Result<f64, Error> {
        match self {
            Value::Double(value) => Ok(*value),
            other => Err(Error::kind_mismatch(Kind::Double, other.kind())),
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] if the value is not a string.
    pub fn try_as_str(&self) -> Result<&str, Error> {
        match self {
            Value::String(value) => Ok(value),
            other => Err(Error::kind_mismatch(Kind::String, other.kind())),
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] if the value is not an array.
    pub fn try_as_array(&self) -> Result<&[Value], Error> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(Error::kind_mismatch(Kind::Array, other.kind())),
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] if the value is not an object.
    pub fn try_as_object(&self) -> Result<&Map, Error> {
        match self {
            Value::Object(entries) => Ok(entries),
            other => Err(Error::kind_mismatch(Kind::Object, other.kind())),
        }
    }

    /// Number of elements of an array or entries of an object.
    ///
    /// # Panics
    ///
    /// Panics if the value is neither an array nor an object.
    #[must_use]
    #[track_caller]
    pub fn len(&self) -> usize {
        match self {
            Value::Array(items) => items.len(),
            Value::Object(entries) => entries.len(),
            other => violation(Error::not_a_container(other.kind())),
        }
    }

    /// # Panics
    ///
    /// Panics if the value is neither an array nor an object.
    #[must_use]
    #[track_caller]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the elements of an array.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an array.
    #[track_caller]
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.as_array().iter()
    }

    /// Iterate over the entries of an object in key order.
    ///
    /// # Panics
    ///
    /// Panics if the value is not an object.
    #[track_caller]
    pub fn entries(&self) -> btree_map::Iter<'_, String, Value> {
        self.as_object().iter()
    }
}

macro_rules! impl_try_from {
    ($ty:ty, $kind:expr, $variant:ident) => {
        impl TryFrom<Value> for $ty {
            type Error = Error;

            fn try_from(mut value: Value) -> Result<Self, Self::Error> {
                // `Value` implements `Drop`, so the payload is swapped out.
                match &mut value {
                    Value::$variant(inner) => Ok(mem::take(inner)),
                    other => Err(Error::kind_mismatch($kind, other.kind())),
                }
            }
        }

        impl TryFrom<&Value> for $ty {
            type Error = Error;

            fn try_from(value: &Value) -> Result<Self, Self::Error> {
                match value {
                    Value::$variant(inner) => Ok(Clone::clone(inner)),
                    other => Err(Error::kind_mismatch($kind, other.kind())),
                }
            }
        }
    };
}

impl_try_from!(bool, Kind::Bool, Bool);
impl_try_from!(i32, Kind::Integer, Integer);
impl_try_from!(f64, Kind::Double, Double);
impl_try_from!(String, Kind::String, String);
impl_try_from!(Vec<Value>, Kind::Array, Array);
impl_try_from!(Map, Kind::Object, Object);

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn scalars_round_trip_through_matching_accessor() {
        assert!(Value::from(true).as_bool());
        assert_eq!(Value::from(10).as_int(), 10);
        assert!((Value::from(1.2).as_double() - 1.2).abs() < f64::EPSILON);
        assert_eq!(Value::from("hello").as_string(), "hello");
        assert_eq!(Value::from("hello").as_str(), "hello");
    }

    #[test]
    fn as_string_returns_a_copy() {
        let mut value = Value::from("hello");
        let copy = value.as_string();
        value.release();
        assert_eq!(copy, "hello");
    }

    #[test]
    #[should_panic(expected = "value is not of integer type (found double)")]
    fn double_is_not_an_integer() {
        let _ = Value::from(1.0).as_int();
    }

    #[test]
    #[should_panic(expected = "value is not of double type (found integer)")]
    fn integer_is_not_a_double() {
        let _ = Value::from(1).as_double();
    }

    #[test]
    #[should_panic(expected = "value is not of bool type (found null)")]
    fn null_is_not_a_bool() {
        let _ = Value::Null.as_bool();
    }

    #[test]
    #[should_panic(expected = "value is not of string type (found bool)")]
    fn bool_is_not_a_string() {
        let _ = Value::from(false).as_string();
    }

    #[test_case(Value::from(true), Kind::Bool)]
    #[test_case(Value::from(3), Kind::Integer)]
    #[test_case(Value::from(3.5), Kind::Double)]
    #[test_case(Value::from("s"), Kind::String)]
    #[test_case(Value::Null, Kind::Null)]
    fn try_accessors_report_found_kind(value: Value, found: Kind) {
        let results = [
            (Kind::Bool, value.try_as_bool().err()),
            (Kind::Integer, value.try_as_int().err()),
            (Kind::Double, value.try_as_double().err()),
            (Kind::String, value.try_as_str().err()),
        ];
        for (expected, error) in results {
            if expected == found {
                assert_eq!(error, None);
            } else {
                assert_eq!(error, Some(Error::kind_mismatch(expected, found)));
            }
        }
    }

    #[test]
    fn try_from_owned_and_borrowed() {
        let value = Value::from("owned");
        assert_eq!(String::try_from(&value), Ok("owned".to_string()));
        assert_eq!(String::try_from(value), Ok("owned".to_string()));
        assert_eq!(
            i32::try_from(Value::from(true)),
            Err(Error::kind_mismatch(Kind::Integer, Kind::Bool))
        );
        assert_eq!(bool::try_from(&Value::from(true)), Ok(true));
    }

    #[test]
    fn try_from_containers() {
        let array: Value = [1_i32, 2].into_iter().collect();
        let items = vec![Value::Integer(1), Value::Integer(2)];
        assert_eq!(Vec::<Value>::try_from(&array), Ok(items.clone()));
        assert_eq!(Vec::<Value>::try_from(array), Ok(items));

        let object: Value = [("k", "v")].into_iter().collect();
        let mut entries = Map::new();
        entries.insert("k".to_string(), Value::from("v"));
        assert_eq!(Map::try_from(&object), Ok(entries.clone()));
        assert_eq!(Map::try_from(object), Ok(entries));

        assert_eq!(
            Vec::<Value>::try_from(Value::with_kind(Kind::Object)),
            Err(Error::kind_mismatch(Kind::Array, Kind::Object))
        );
        assert_eq!(
            Map::try_from(&Value::with_kind(Kind::Array)),
            Err(Error::kind_mismatch(Kind::Object, Kind::Array))
        );
    }

    #[test]
    #[should_panic(expected = "value is not of array or object type (found null)")]
    fn is_empty_of_null() {
        let _ = Value::Null.is_empty();
    }

    #[test]
    fn container_views() {
        let array: Value = ["a", "b"].into_iter().collect();
        assert_eq!(array.len(), 2);
        assert_eq!(
            array.iter().map(Value::as_str).collect::<Vec<_>>(),
            ["a", "b"]
        );

        let object: Value = [("y", 2_i32), ("x", 1)].into_iter().collect();
        let keys: Vec<&str> = object.entries().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["x", "y"]);
        assert!(!object.is_empty());
        assert!(Value::with_kind(Kind::Object).is_empty());
    }

    #[test]
    #[should_panic(expected = "value is not of array or object type (found string)")]
    fn len_of_scalar() {
        let _ = Value::from("abc").len();
    }
}

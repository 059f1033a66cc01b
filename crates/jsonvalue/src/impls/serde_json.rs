use std::mem;

use serde_json::{Number, Value as JsonValue};

use crate::Value;

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(num) => from_number(&num),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            JsonValue::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&JsonValue> for Value {
    fn from(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(*b),
            JsonValue::Number(num) => from_number(num),
            JsonValue::String(s) => Value::String(s.clone()),
            JsonValue::Array(items) => Value::Array(items.iter().map(Value::from).collect()),
            JsonValue::Object(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

fn from_number(num: &Number) -> Value {
    number_value(num.as_i64(), num.as_f64())
}

/// Integers within `i32` range stay integers, everything else becomes a double.
/// With `arbitrary_precision` a number may fit neither `i64` nor `f64`, and it
/// becomes `Null`, the same way non-finite doubles do on the way out.
fn number_value(int: Option<i64>, float: Option<f64>) -> Value {
    if let Some(i) = int.and_then(|i| i32::try_from(i).ok()) {
        Value::Integer(i)
    } else if let Some(f) = float {
        Value::Double(f)
    } else {
        Value::Null
    }
}

impl From<Value> for JsonValue {
    fn from(mut value: Value) -> Self {
        // `Value` implements `Drop`, so payloads are swapped out.
        match &mut value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Integer(i) => JsonValue::Number((*i).into()),
            // NaN and infinities have no JSON representation
            Value::Double(f) => Number::from_f64(*f).map_or(JsonValue::Null, JsonValue::Number),
            Value::String(s) => JsonValue::String(mem::take(s)),
            Value::Array(items) => {
                JsonValue::Array(mem::take(items).into_iter().map(JsonValue::from).collect())
            }
            Value::Object(entries) => JsonValue::Object(
                mem::take(entries)
                    .into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl PartialEq<JsonValue> for Value {
    fn eq(&self, other: &JsonValue) -> bool {
        eq(other, self)
    }
}

impl PartialEq<Value> for JsonValue {
    fn eq(&self, other: &Value) -> bool {
        eq(self, other)
    }
}

fn eq(lhs: &JsonValue, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (JsonValue::Null, Value::Null) => true,
        (JsonValue::Bool(l), Value::Bool(r)) => l == r,
        (JsonValue::Number(l), Value::Integer(_) | Value::Double(_)) => from_number(l) == *rhs,
        (JsonValue::String(l), Value::String(r)) => l == r,
        (JsonValue::Array(l), Value::Array(r)) => {
            if l.len() != r.len() {
                return false;
            }
            for (l, r) in l.iter().zip(r.iter()) {
                if !eq(l, r) {
                    return false;
                }
            }
            true
        }
        (JsonValue::Object(l), Value::Object(r)) => {
            if l.len() != r.len() {
                return false;
            }
            // `serde_json::Map` may preserve insertion order, so look keys up
            // instead of zipping the two iterators.
            for (key, lv) in l {
                match r.get(key) {
                    Some(rv) if eq(lv, rv) => continue,
                    _ => return false,
                }
            }
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Map;
    use serde_json::json;
    use test_case::test_case;

    fn object(entries: Vec<(&str, Value)>) -> Value {
        Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v))
                .collect::<Map>(),
        )
    }

    #[test_case(json!(null), Value::Null; "null")]
    #[test_case(json!(true), Value::Bool(true); "bool")]
    #[test_case(json!(42), Value::Integer(42); "integer")]
    #[test_case(json!(-42), Value::Integer(-42); "negative integer")]
    #[test_case(json!(3_000_000_000_u64), Value::Double(3_000_000_000.0); "integer out of i32 range")]
    #[test_case(json!(3.25), Value::Double(3.25); "double")]
    #[test_case(json!("hello"), Value::String("hello".into()); "string")]
    #[test_case(
        json!([1, "x", [true]]),
        Value::Array(vec![
            Value::Integer(1),
            Value::String("x".into()),
            Value::Array(vec![Value::Bool(true)]),
        ]);
        "array"
    )]
    #[test_case(
        json!({"b": "test", "a": 1, "c": true}),
        object(vec![
            ("a", Value::Integer(1)),
            ("b", Value::String("test".into())),
            ("c", Value::Bool(true)),
        ]);
        "object"
    )]
    fn test_json_conversion(value: JsonValue, expected: Value) {
        assert_eq!(Value::from(&value), expected);
        assert_eq!(Value::from(value), expected);
    }

    #[test_case(Some(7), Some(7.0), Value::Integer(7); "small integer")]
    #[test_case(Some(i64::MAX), Some(9.223_372_036_854_776e18), Value::Double(9.223_372_036_854_776e18); "wide integer")]
    #[test_case(None, Some(0.5), Value::Double(0.5); "double")]
    #[test_case(None, None, Value::Null; "unrepresentable")]
    fn test_number_value(int: Option<i64>, float: Option<f64>, expected: Value) {
        assert_eq!(number_value(int, float), expected);
    }

    #[test_case(Value::Integer(7), json!(7); "integer")]
    #[test_case(Value::Double(0.5), json!(0.5); "double")]
    #[test_case(Value::Double(f64::NAN), json!(null); "nan")]
    #[test_case(Value::Double(f64::INFINITY), json!(null); "infinity")]
    #[test_case(
        object(vec![("list", Value::Array(vec![Value::Null, Value::from("s")]))]),
        json!({"list": [null, "s"]});
        "nested"
    )]
    fn test_into_json(value: Value, expected: JsonValue) {
        assert_eq!(JsonValue::from(value), expected);
    }

    #[test_case(json!(null), Value::Null; "null equals")]
    #[test_case(json!(false), Value::Bool(false); "bool equals")]
    #[test_case(json!(42), Value::Integer(42); "integer equals")]
    #[test_case(json!(4.5), Value::Double(4.5); "double equals")]
    #[test_case(json!("hello"), Value::from("hello"); "string equals")]
    #[test_case(
        json!([1, 2, 3]),
        Value::from_iter([1_i32, 2, 3]);
        "array equals"
    )]
    #[test_case(
        json!({"b": "test", "a": 1}),
        object(vec![("a", Value::Integer(1)), ("b", Value::from("test"))]);
        "object equals"
    )]
    fn test_comparison_eq(json: JsonValue, custom: Value) {
        assert_eq!(json, custom);
        assert_eq!(custom, json);
    }

    #[test_case(json!(null), Value::Bool(true); "null != bool")]
    #[test_case(json!(1), Value::Double(1.0); "integer != double")]
    #[test_case(json!(1.5), Value::Integer(1); "double != integer")]
    #[test_case(json!("hello"), Value::from("world"); "different strings")]
    #[test_case(
        json!([1, 2, 3]),
        Value::from_iter([1_i32, 2, 4]);
        "different arrays"
    )]
    #[test_case(
        json!({"a": 1}),
        object(vec![("a", Value::Integer(2))]);
        "different objects"
    )]
    #[test_case(
        json!({"a": 1}),
        object(vec![("b", Value::Integer(1))]);
        "different keys"
    )]
    fn test_comparison_neq(json: JsonValue, custom: Value) {
        assert_ne!(json, custom);
        assert_ne!(custom, json);
    }
}

// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Structural comparison and key selection on generic JSON-like values.

use serde::Serialize;
use serde_json::{Map, Number, Value};
use tidbit_error::{Result, TidbitError};

/// Compares two values structurally.
///
/// Unlike `==` on [`Value`], numbers compare by numeric value, so `1` and
/// `1.0` are equal. Arrays compare element-wise; objects compare key-wise
/// regardless of key order.
///
/// ```
/// use serde_json::json;
/// use tidbit_util::deep_equals;
///
/// assert!(deep_equals(&json!({"a": [1, 2.0]}), &json!({"a": [1.0, 2]})));
/// assert!(!deep_equals(&json!({"a": 1}), &json!({"a": 1, "b": null})));
/// ```
pub fn deep_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => numbers_equal(x, y),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| deep_equals(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| deep_equals(x, y)))
        }
        _ => a == b,
    }
}

/// Serializes both sides and compares them with [`deep_equals`].
///
/// # Errors
/// Returns [`TidbitError::Serialization`] if either side fails to serialize.
pub fn equals<A, B>(a: &A, b: &B) -> Result<bool>
where
    A: Serialize + ?Sized,
    B: Serialize + ?Sized,
{
    Ok(deep_equals(&serde_json::to_value(a)?, &serde_json::to_value(b)?))
}

fn numbers_equal(x: &Number, y: &Number) -> bool {
    if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
        return x == y;
    }
    match (x.as_f64(), y.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Copies the entries of `object` whose key is listed in `keys`.
///
/// Keys missing from `object` are ignored.
pub fn pick(object: &Map<String, Value>, keys: &[&str]) -> Map<String, Value> {
    object
        .iter()
        .filter(|(key, _)| keys.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Serializes `value` and picks `keys` from the resulting object.
///
/// # Errors
/// - [`TidbitError::Serialization`] if `value` fails to serialize
/// - [`TidbitError::NotAnObject`] if it does not serialize to a map/struct
pub fn pick_from<T>(value: &T, keys: &[&str]) -> Result<Map<String, Value>>
where
    T: Serialize + ?Sized,
{
    match serde_json::to_value(value)? {
        Value::Object(object) => Ok(pick(&object, keys)),
        other => Err(TidbitError::not_an_object(kind_of(&other))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

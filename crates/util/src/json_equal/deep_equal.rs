use serde_json::{Number, Value};

/// Performs a deep equality check between two JSON values.
///
/// - Null, booleans and strings compare by value.
/// - Numbers compare numerically: `1` equals `1.0` and `0.0` equals `-0.0`.
/// - Arrays are equal when they have the same length and equal elements.
/// - Objects are equal when they have the same key set and equal values per
///   key; key order is ignored.
///
/// Values of different kinds are never equal.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use json_delta_util::json_equal::deep_equal;
///
/// let a = json!({"foo": [1, 2, 3]});
/// let b = json!({"foo": [1, 2, 3]});
/// let c = json!({"foo": [1, 2, 4]});
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    if std::ptr::eq(a, b) {
        return true;
    }
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,

        (Value::Array(arr_a), Value::Array(arr_b)) => {
            arr_a.len() == arr_b.len() && arr_a.iter().zip(arr_b).all(|(x, y)| deep_equal(x, y))
        }

        (Value::Object(obj_a), Value::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            for (key, val_a) in obj_a {
                match obj_b.get(key) {
                    Some(val_b) if deep_equal(val_a, val_b) => {}
                    _ => return false,
                }
            }
            true
        }

        _ => false,
    }
}

/// Numeric equality used by [`deep_equal`].
///
/// Integers that fit `i64`/`u64` compare exactly; everything else compares as
/// `f64`, with NaN equal to NaN and the two zeros equal to each other.
pub fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y || (x.is_nan() && y.is_nan()),
        _ => false,
    }
}

/// Strict numeric identity: like [`numbers_equal`] but `0.0` and `-0.0` differ.
pub fn numbers_identical(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => {
            (x == y && x.is_sign_negative() == y.is_sign_negative()) || (x.is_nan() && y.is_nan())
        }
        _ => false,
    }
}

/// Identity check: the same composite node, or scalars that are strictly the
/// same value.
///
/// Two distinct arrays or objects are never identical, even with equal
/// contents; use [`deep_equal`] for that.
///
/// ```
/// use serde_json::json;
/// use json_delta_util::json_equal::identical;
///
/// let doc = json!({"a": [1]});
/// assert!(identical(&doc, &doc));
/// assert!(!identical(&doc, &json!({"a": [1]})));
/// assert!(identical(&json!(1), &json!(1.0)));
/// assert!(!identical(&json!(0.0), &json!(-0.0)));
/// ```
pub fn identical(a: &Value, b: &Value) -> bool {
    if std::ptr::eq(a, b) {
        return true;
    }
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_identical(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        _ => false,
    }
}

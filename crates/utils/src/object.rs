//! Emptiness checks for dynamic JSON values.

use serde_json::Value;

/// Returns `true` if `value` is a plain JSON object with zero keys.
///
/// Only the `Value::Object` variant qualifies as a plain mapping. Every
/// other variant returns `false` even when it is structurally empty, so an
/// empty array, an empty string, or `null` is never reported as an empty
/// object.
///
/// # Examples
///
/// ```
/// use satchel_utils::object::is_empty_object;
/// use serde_json::json;
///
/// assert!(is_empty_object(&json!({})));
/// assert!(!is_empty_object(&json!({ "a": 1 })));
/// assert!(!is_empty_object(&json!([])));
/// ```
pub fn is_empty_object(value: &Value) -> bool {
    matches!(value, Value::Object(map) if map.is_empty())
}

/// Extension trait for JSON values providing `is_empty_object` as a method.
///
/// This allows for more fluent code when inspecting values inline.
///
/// # Examples
///
/// ```
/// use satchel_utils::object::ValueExt;
/// use serde_json::json;
///
/// assert!(json!({}).is_empty_object());
/// assert!(!json!({ "a": 1 }).is_empty_object());
/// ```
pub trait ValueExt {
    /// Returns `true` if this value is a plain object with zero keys.
    fn is_empty_object(&self) -> bool;
}

impl ValueExt for Value {
    fn is_empty_object(&self) -> bool {
        is_empty_object(self)
    }
}

//! Optional chaining over loosely structured game data.
//!
//! Lookups never fail: a missing key, or an intermediate value that is not an
//! object, ends the walk with `None`.

use serde_json::Value;

/// Follow `path` one object key at a time.
///
/// An empty path yields `obj` itself.
pub fn safe_get<'a>(path: &[&str], obj: &'a Value) -> Option<&'a Value> {
    path.iter()
        .try_fold(obj, |current, key| current.as_object()?.get(*key))
}

/// Like [`safe_get`], but the value at the end of the path must be a number.
pub fn safe_get_f64(path: &[&str], obj: &Value) -> Option<f64> {
    safe_get(path, obj).and_then(Value::as_f64)
}

#[cfg(test)]
mod tests;

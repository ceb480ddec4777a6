//! The integer value domain.
//!
//! Every node evaluates to a [`Value`]. Booleans are 0 and 1; any nonzero
//! value counts as true when a boolean is expected.

/// Runtime value: a signed 64-bit integer.
pub type Value = i64;

/// 1 for true, 0 for false.
#[inline]
pub fn from_bool(b: bool) -> Value {
    Value::from(b)
}

/// Nonzero is true.
#[inline]
pub fn is_truthy(value: Value) -> bool {
    value != 0
}

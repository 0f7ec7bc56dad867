// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dynamic configuration values.
//!
//! This module provides [`Value`], the loosely typed value that flows into
//! setters and lives in a [`BackingStore`](crate::BackingStore), and
//! [`OpaqueValue`] for payloads the configuration layer never inspects.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use core::any::{Any, TypeId};
use core::fmt;

/// A loosely typed configuration value.
///
/// Raw setter inputs arrive as a `Value` of any variant. The coercion rule of
/// the declared [`PropertyKind`](crate::PropertyKind) decides what is stored.
///
/// # Example
///
/// ```rust
/// use crosswalk_config::Value;
///
/// assert!(Value::from("yes").is_truthy());
/// assert!(!Value::from("").is_truthy());
/// assert_eq!(Value::from(7_i64).to_js_string(), "7");
/// ```
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// No value at all.
    #[default]
    Undefined,
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer, the result of integer coercion.
    Int(i64),
    /// A floating point number supplied by the host.
    Number(f64),
    /// A string.
    Str(String),
    /// The sentinel stored when integer coercion finds no digits.
    NotANumber,
    /// A payload stored verbatim.
    Opaque(OpaqueValue),
}

impl Value {
    /// Returns `true` if this is [`Value::Undefined`].
    #[must_use]
    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` if this value is the not-a-number sentinel, or a host
    /// number that is NaN.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        match self {
            Self::NotANumber => true,
            Self::Number(n) => n.is_nan(),
            _ => false,
        }
    }

    /// Truthiness, following the browser rules.
    ///
    /// `Undefined`, `Null`, `false`, zero, NaN and the empty string are falsy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null | Self::NotANumber => false,
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Number(n) => !(n.is_nan() || *n == 0.0),
            Self::Str(s) => !s.is_empty(),
            Self::Opaque(_) => true,
        }
    }

    /// Converts the value to the string a browser would produce for it.
    #[must_use]
    pub fn to_js_string(&self) -> String {
        match self {
            Self::Undefined => "undefined".into(),
            Self::Null => "null".into(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Number(n) => number_to_string(*n),
            Self::Str(s) => s.clone(),
            Self::NotANumber => "NaN".into(),
            Self::Opaque(_) => "[object Object]".into(),
        }
    }

    /// Returns the boolean, if this is [`Value::Bool`].
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer, if this is [`Value::Int`].
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the string slice, if this is [`Value::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".into()
    } else if n.is_infinite() {
        let s = if n > 0.0 { "Infinity" } else { "-Infinity" };
        s.into()
    } else if n == 0.0 {
        // Negative zero prints as "0".
        "0".into()
    } else {
        let magnitude = if n < 0.0 { -n } else { n };
        if (1e-6..1e21).contains(&magnitude) {
            format!("{n}")
        } else {
            // Exponent form with an explicit sign on non-negative exponents.
            let s = format!("{n:e}");
            match s.split_once('e') {
                Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
                _ => s,
            }
        }
    }
}

impl PartialEq for Value {
    /// Structural equality. `NotANumber` equals itself so stored sentinels
    /// can be compared in assertions; host NaN numbers never compare equal.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined)
            | (Self::Null, Self::Null)
            | (Self::NotANumber, Self::NotANumber) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Opaque(a), Self::Opaque(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<OpaqueValue> for Value {
    fn from(value: OpaqueValue) -> Self {
        Self::Opaque(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A shared, type-erased payload.
///
/// Opaque values are never coerced. Two opaque values are equal only when
/// they share the same allocation.
///
/// ```rust
/// use crosswalk_config::OpaqueValue;
///
/// let value = OpaqueValue::new([1_u8, 2, 3]);
/// assert!(value.is::<[u8; 3]>());
/// assert_eq!(value.downcast_ref::<[u8; 3]>(), Some(&[1, 2, 3]));
/// assert_eq!(value, value.clone());
/// ```
#[derive(Clone)]
pub struct OpaqueValue {
    inner: Arc<dyn Any + Send + Sync>,
    type_id: TypeId,
}

impl OpaqueValue {
    /// Wraps a concrete value.
    #[must_use]
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            inner: Arc::new(value),
        }
    }

    /// Returns the [`TypeId`] of the contained value.
    #[must_use]
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns `true` if the contained value is of type `T`.
    #[must_use]
    #[inline]
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    /// Attempts to downcast to a reference of type `T`.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.inner.downcast_ref()
    }
}

impl PartialEq for OpaqueValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpaqueValue")
            .field("type_id", &self.type_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        assert!(!Value::Undefined.is_truthy());
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Int(0).is_truthy());
        assert!(!Value::Number(0.0).is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(!Value::NotANumber.is_truthy());

        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Int(-1).is_truthy());
        assert!(Value::from("0").is_truthy());
        assert!(Value::Opaque(OpaqueValue::new(())).is_truthy());
    }

    #[test]
    fn js_strings() {
        assert_eq!(Value::Undefined.to_js_string(), "undefined");
        assert_eq!(Value::Null.to_js_string(), "null");
        assert_eq!(Value::Bool(false).to_js_string(), "false");
        assert_eq!(Value::Int(-12).to_js_string(), "-12");
        assert_eq!(Value::Number(3.5).to_js_string(), "3.5");
        assert_eq!(Value::Number(2.0).to_js_string(), "2");
        assert_eq!(Value::Number(-0.0).to_js_string(), "0");
        assert_eq!(Value::Number(f64::INFINITY).to_js_string(), "Infinity");
        assert_eq!(Value::NotANumber.to_js_string(), "NaN");
    }

    #[test]
    fn extreme_numbers_use_exponent_form() {
        assert_eq!(Value::Number(1e21).to_js_string(), "1e+21");
        assert_eq!(Value::Number(-2.5e30).to_js_string(), "-2.5e+30");
        assert_eq!(Value::Number(5e-7).to_js_string(), "5e-7");
        assert_eq!(Value::Number(1.5e-7).to_js_string(), "1.5e-7");
        assert_eq!(Value::Number(1e20).to_js_string(), "100000000000000000000");
        assert_eq!(Value::Number(0.000_001).to_js_string(), "0.000001");
    }

    #[test]
    fn nan_sentinel_equality() {
        assert_eq!(Value::NotANumber, Value::NotANumber);
        assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
        assert!(Value::NotANumber.is_nan());
        assert!(Value::Number(f64::NAN).is_nan());
        assert!(!Value::Int(0).is_nan());
    }

    #[test]
    fn option_maps_none_to_null() {
        assert_eq!(Value::from(None::<bool>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::from("a"));
    }

    #[test]
    fn opaque_identity() {
        let a = OpaqueValue::new(42_u32);
        let b = OpaqueValue::new(42_u32);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(a.downcast_ref::<u32>(), Some(&42));
        assert_eq!(a.downcast_ref::<i32>(), None);
    }

    #[test]
    fn opaque_debug() {
        let value = OpaqueValue::new(1_u8);
        let debug = format!("{value:?}");
        assert!(debug.contains("OpaqueValue"), "debug output was {debug}");
    }
}

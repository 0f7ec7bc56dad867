// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed property keys.
//!
//! This module provides [`ConfigKey<T>`], a handle returned by typed
//! declarations that reads the stored [`Value`] back as `T`.

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;
use core::marker::PhantomData;

use crate::error::ConfigError;
use crate::kind::PropertyKind;
use crate::value::Value;

/// A Rust type that a configuration property can be read as.
pub trait PropertyType: Sized {
    /// The kind declared for properties of this type.
    const KIND: PropertyKind;

    /// Converts a stored value into `Self`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotANumber`] for the integer sentinel and
    /// [`ConfigError::TypeMismatch`] for any other unexpected value.
    fn from_value(name: &str, value: Value) -> Result<Self, ConfigError>;
}

fn mismatch(name: &str, expected: PropertyKind) -> ConfigError {
    ConfigError::TypeMismatch {
        name: name.into(),
        expected,
    }
}

impl PropertyType for bool {
    const KIND: PropertyKind = PropertyKind::Boolean;

    fn from_value(name: &str, value: Value) -> Result<Self, ConfigError> {
        value.as_bool().ok_or_else(|| mismatch(name, Self::KIND))
    }
}

impl PropertyType for i64 {
    const KIND: PropertyKind = PropertyKind::Integer;

    fn from_value(name: &str, value: Value) -> Result<Self, ConfigError> {
        match value {
            Value::Int(i) => Ok(i),
            Value::NotANumber => Err(ConfigError::NotANumber { name: name.into() }),
            _ => Err(mismatch(name, Self::KIND)),
        }
    }
}

impl PropertyType for String {
    const KIND: PropertyKind = PropertyKind::String;

    fn from_value(name: &str, value: Value) -> Result<Self, ConfigError> {
        match value {
            Value::Str(s) => Ok(s),
            _ => Err(mismatch(name, Self::KIND)),
        }
    }
}

impl PropertyType for Value {
    const KIND: PropertyKind = PropertyKind::Opaque;

    fn from_value(_name: &str, value: Value) -> Result<Self, ConfigError> {
        Ok(value)
    }
}

/// A typed handle to a declared property.
///
/// The phantom type fixes what [`ConfigObject::get`](crate::ConfigObject::get)
/// returns for this property:
///
/// ```rust
/// use crosswalk_config::{ConfigKey, ConfigObject};
///
/// let mut config = ConfigObject::new();
/// let port: ConfigKey<i64> = config.property("port", 5900_i64, "Server port")?;
///
/// let value: i64 = config.get(&port)?;
/// assert_eq!(value, 5900);
/// # Ok::<(), crosswalk_config::ConfigError>(())
/// ```
pub struct ConfigKey<T> {
    name: Arc<str>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ConfigKey<T> {
    /// Creates a key for `name` without declaring anything.
    ///
    /// Reading through a key whose name was never declared fails with
    /// [`ConfigError::Undeclared`].
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            _marker: PhantomData,
        }
    }

    /// Returns the property name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T> Clone for ConfigKey<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> PartialEq for ConfigKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T> Eq for ConfigKey<T> {}

impl<T> fmt::Debug for ConfigKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConfigKey").field(&&*self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn key_equality_and_debug() {
        let a = ConfigKey::<bool>::new("shared");
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(a.name(), "shared");
        assert_eq!(format!("{a:?}"), "ConfigKey(\"shared\")");
    }

    #[test]
    fn bool_conversion() {
        assert_eq!(bool::from_value("a", Value::Bool(true)), Ok(true));
        assert!(matches!(
            bool::from_value("a", Value::Int(1)),
            Err(ConfigError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn integer_conversion_reports_sentinel() {
        assert_eq!(i64::from_value("port", Value::Int(80)), Ok(80));
        assert_eq!(
            i64::from_value("port", Value::NotANumber),
            Err(ConfigError::NotANumber {
                name: "port".into()
            })
        );
    }

    #[test]
    fn string_and_opaque_conversion() {
        assert_eq!(
            String::from_value("s", Value::from("x")),
            Ok(String::from("x"))
        );
        assert_eq!(Value::from_value("v", Value::Null), Ok(Value::Null));
    }
}

// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use crate::kind::PropertyKind;

/// Errors reported by the configuration layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A property was declared with an empty name.
    EmptyName,
    /// No accessor is installed for the named property.
    Undeclared {
        /// The requested property name.
        name: String,
    },
    /// An integer property holds the not-a-number sentinel.
    NotANumber {
        /// The property name.
        name: String,
    },
    /// The stored value does not match the type requested by a typed key.
    TypeMismatch {
        /// The property name.
        name: String,
        /// The kind the caller asked for.
        expected: PropertyKind,
    },
    /// A property was re-declared with a different kind.
    KindConflict {
        /// The property name.
        name: String,
        /// The kind the property was first declared with.
        declared: PropertyKind,
        /// The kind of the rejected declaration.
        requested: PropertyKind,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => f.write_str("property name must not be empty"),
            Self::Undeclared { name } => write!(f, "property '{name}' has not been declared"),
            Self::NotANumber { name } => {
                write!(f, "integer property '{name}' holds a value that is not a number")
            }
            Self::TypeMismatch { name, expected } => {
                write!(f, "property '{name}' does not hold a {expected} value")
            }
            Self::KindConflict {
                name,
                declared,
                requested,
            } => write!(
                f,
                "property '{name}' is declared as {declared}, not {requested}"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}

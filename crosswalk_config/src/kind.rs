// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property kinds and their coercion rules.

use core::fmt;
use core::str::FromStr;

use crate::value::Value;

/// The declared type of a configuration property.
///
/// The kind selects the coercion rule applied to every raw value written
/// through a generated setter.
///
/// ```rust
/// use crosswalk_config::{PropertyKind, Value};
///
/// assert_eq!(PropertyKind::Boolean.coerce(Value::from("no")), Value::Bool(false));
/// assert_eq!(PropertyKind::Integer.coerce(Value::from("42px")), Value::Int(42));
/// assert_eq!(PropertyKind::String.coerce(Value::from(1_i64)), Value::Int(1));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum PropertyKind {
    /// Falsy inputs and `"0"`, `"no"`, `"false"` store `false`; everything else `true`.
    Boolean,
    /// Inputs are parsed as base-10 integers.
    Integer,
    /// Inputs are stored verbatim.
    String,
    /// Inputs are stored verbatim.
    #[default]
    Opaque,
}

impl PropertyKind {
    /// Maps a kind name to a kind.
    ///
    /// `"boolean"`/`"bool"` and `"integer"`/`"int"` select the coercing kinds,
    /// `"string"`/`"str"` selects [`PropertyKind::String`]. Any other name is
    /// treated as [`PropertyKind::Opaque`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "boolean" | "bool" => Self::Boolean,
            "integer" | "int" => Self::Integer,
            "string" | "str" => Self::String,
            _ => Self::Opaque,
        }
    }

    /// Returns the canonical name of this kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::String => "string",
            Self::Opaque => "opaque",
        }
    }

    /// Applies this kind's coercion rule to a raw value.
    #[must_use]
    pub fn coerce(self, raw: Value) -> Value {
        match self {
            Self::Boolean => Value::Bool(coerce_boolean(&raw)),
            Self::Integer => parse_int(&raw),
            Self::String | Self::Opaque => raw,
        }
    }
}

impl FromStr for PropertyKind {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Boolean coercion.
///
/// Falsy values and the strings `"0"`, `"no"` and `"false"` (after
/// stringification) coerce to `false`.
#[must_use]
pub fn coerce_boolean(raw: &Value) -> bool {
    if !raw.is_truthy() {
        return false;
    }
    !matches!(raw.to_js_string().as_str(), "0" | "no" | "false")
}

/// Base-10 integer parse with prefix semantics.
///
/// Leading whitespace and an optional sign are accepted, then as many
/// decimal digits as are present. Host numbers are parsed from their string
/// form, so `5e-7` reads as `5` and `1e21` as `1`.
/// Returns [`Value::NotANumber`] when no digits are found, and for results
/// that do not fit in an `i64`.
#[must_use]
pub fn parse_int(raw: &Value) -> Value {
    match raw {
        Value::Int(i) => Value::Int(*i),
        Value::Number(n) if n.is_finite() => {
            parse_int_prefix(&raw.to_js_string()).map_or(Value::NotANumber, Value::Int)
        }
        Value::Str(s) => parse_int_prefix(s).map_or(Value::NotANumber, Value::Int),
        Value::Undefined
        | Value::Null
        | Value::Bool(_)
        | Value::Number(_)
        | Value::NotANumber
        | Value::Opaque(_) => Value::NotANumber,
    }
}

fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let mut acc: i64 = 0;
    for b in digits[..end].bytes() {
        let digit = i64::from(b - b'0');
        acc = acc.checked_mul(10)?;
        acc = if negative {
            acc.checked_sub(digit)?
        } else {
            acc.checked_add(digit)?
        };
    }
    Some(acc)
}

// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crosswalk Config: typed, defaulted configuration accessors.
//!
//! This crate builds the public configuration surface of an object one
//! property at a time. Each declaration installs a getter/setter pair over a
//! per-object [`BackingStore`], applies a coercion rule chosen by the
//! property's [`PropertyKind`], and fills in a default.
//!
//! ## Core Concepts
//!
//! - [`Value`]: the loosely typed value setters accept and stores hold.
//! - [`PropertyKind`]: `Boolean`, `Integer`, `String` or `Opaque`, each with
//!   its coercion rule.
//! - [`PropertyDescriptor`]: name, kind, default, description, and optional custom
//!   accessors used in place of the generated ones.
//! - [`AccessorTable`] + [`declare_property`]: the accessor surface and the
//!   operation that installs one property on it.
//! - [`ConfigObject`]: a store and its table owned together, with typed
//!   [`ConfigKey`] handles.
//!
//! ## Coercion
//!
//! | Kind | Rule |
//! |------|------|
//! | `Boolean` | falsy, `"0"`, `"no"`, `"false"` → `false`; otherwise `true` |
//! | `Integer` | base-10 prefix parse; no digits → [`Value::NotANumber`] |
//! | `String`, `Opaque` | stored verbatim |
//!
//! The not-a-number sentinel is stored, not rejected. Typed reads through
//! [`ConfigObject::get`] report it as [`ConfigError::NotANumber`].
//!
//! ## Quick Start
//!
//! ```rust
//! use crosswalk_config::{ConfigObject, PropertyKind, PropertyDescriptor, Value};
//!
//! let mut config = ConfigObject::new();
//! let shared = config.property::<bool>("shared", true, "Request a shared session")?;
//! config.declare(
//!     PropertyDescriptor::builder("repeater_id", PropertyKind::String)
//!         .default_value("")
//!         .description("Repeater ID")
//!         .build(),
//! )?;
//!
//! config.set(&shared, "no")?;
//! assert!(!config.get(&shared)?);
//! assert_eq!(config.get_value("repeater_id")?, Value::from(""));
//! # Ok::<(), crosswalk_config::ConfigError>(())
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod descriptor;
mod error;
mod key;
mod kind;
mod object;
mod store;
mod table;
mod value;

pub use descriptor::{AccessorPair, Getter, PropertyDescriptor, PropertyDescriptorBuilder, Setter};
pub use error::ConfigError;
pub use key::{ConfigKey, PropertyType};
pub use kind::{PropertyKind, coerce_boolean, parse_int};
pub use object::ConfigObject;
pub use store::BackingStore;
pub use table::{AccessorTable, DESCRIPTION_SUFFIX, declare_property};
pub use value::{OpaqueValue, Value};

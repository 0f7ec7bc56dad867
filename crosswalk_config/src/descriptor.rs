// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property descriptors.
//!
//! This module provides [`PropertyDescriptor`], the declaration of one configurable
//! property, and [`PropertyDescriptorBuilder`] for ergonomic construction.

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

use crate::kind::PropertyKind;
use crate::store::BackingStore;
use crate::value::Value;

/// Reads a property out of a backing store.
pub type Getter = Arc<dyn Fn(&BackingStore) -> Value + Send + Sync>;

/// Writes a raw value into a backing store.
pub type Setter = Arc<dyn Fn(&mut BackingStore, Value) + Send + Sync>;

/// A getter/setter combination for one named property.
#[derive(Clone)]
pub struct AccessorPair {
    /// Reads the current value.
    pub getter: Getter,
    /// Writes a raw value.
    pub setter: Setter,
}

impl AccessorPair {
    /// Builds the generated pair for `name`: the getter reads `store[name]`,
    /// the setter coerces with `kind` and writes `store[name]`.
    #[must_use]
    pub fn generated(name: &str, kind: PropertyKind) -> Self {
        Self {
            getter: generated_getter(name),
            setter: generated_setter(name, kind),
        }
    }
}

impl fmt::Debug for AccessorPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessorPair").finish_non_exhaustive()
    }
}

pub(crate) fn generated_getter(name: &str) -> Getter {
    let name = String::from(name);
    Arc::new(move |store: &BackingStore| store.get(&name).cloned().unwrap_or_default())
}

pub(crate) fn generated_setter(name: &str, kind: PropertyKind) -> Setter {
    let name = String::from(name);
    Arc::new(move |store: &mut BackingStore, raw: Value| {
        store.insert(name.clone(), kind.coerce(raw));
    })
}

/// The declaration of one configurable property.
///
/// A descriptor names the property, selects its [`PropertyKind`], carries the
/// default applied when the store has no value, and a human-readable
/// description. Custom accessors given here replace the generated ones but
/// never an accessor already installed on the target.
///
/// # Example
///
/// ```rust
/// use crosswalk_config::{PropertyKind, PropertyDescriptor, Value};
///
/// let descriptor = PropertyDescriptor::builder("shared", PropertyKind::Boolean)
///     .default_value(true)
///     .description("Request shared mode")
///     .build();
///
/// assert_eq!(descriptor.name(), "shared");
/// assert_eq!(descriptor.default_value(), &Value::Bool(true));
/// ```
pub struct PropertyDescriptor {
    pub(crate) name: String,
    pub(crate) kind: PropertyKind,
    pub(crate) default_value: Value,
    pub(crate) description: String,
    pub(crate) getter: Option<Getter>,
    pub(crate) setter: Option<Setter>,
}

impl PropertyDescriptor {
    /// Creates a descriptor with no custom accessors.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: PropertyKind,
        default_value: impl Into<Value>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            default_value: default_value.into(),
            description: description.into(),
            getter: None,
            setter: None,
        }
    }

    /// Starts a builder for `name` with `kind`.
    #[must_use]
    pub fn builder(name: impl Into<String>, kind: PropertyKind) -> PropertyDescriptorBuilder {
        PropertyDescriptorBuilder::new(name, kind)
    }

    /// Returns the property name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the property kind.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// Returns the default value.
    #[must_use]
    #[inline]
    pub fn default_value(&self) -> &Value {
        &self.default_value
    }

    /// Returns the description.
    #[must_use]
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether a custom getter is supplied.
    #[must_use]
    #[inline]
    pub fn has_getter(&self) -> bool {
        self.getter.is_some()
    }

    /// Returns whether a custom setter is supplied.
    #[must_use]
    #[inline]
    pub fn has_setter(&self) -> bool {
        self.setter.is_some()
    }
}

// Manual Debug impl since accessors aren't Debug
impl fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("default_value", &self.default_value)
            .field("description", &self.description)
            .field("has_getter", &self.getter.is_some())
            .field("has_setter", &self.setter.is_some())
            .finish()
    }
}

/// Builder for [`PropertyDescriptor`].
///
/// ```rust
/// use crosswalk_config::{PropertyKind, PropertyDescriptor, Value};
///
/// let descriptor = PropertyDescriptor::builder("encoding", PropertyKind::String)
///     .default_value("raw")
///     .getter(|_store| Value::from("tight"))
///     .build();
///
/// assert!(descriptor.has_getter());
/// assert!(!descriptor.has_setter());
/// ```
pub struct PropertyDescriptorBuilder {
    descriptor: PropertyDescriptor,
}

impl fmt::Debug for PropertyDescriptorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PropertyDescriptorBuilder").field(&self.descriptor).finish()
    }
}

impl PropertyDescriptorBuilder {
    /// Creates a builder with an undefined default and an empty description.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            descriptor: PropertyDescriptor::new(name, kind, Value::Undefined, String::new()),
        }
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.descriptor.default_value = value.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.descriptor.description = description.into();
        self
    }

    /// Supplies a custom getter that replaces the generated one.
    #[must_use]
    pub fn getter<F>(mut self, getter: F) -> Self
    where
        F: Fn(&BackingStore) -> Value + Send + Sync + 'static,
    {
        self.descriptor.getter = Some(Arc::new(getter));
        self
    }

    /// Supplies a custom setter that replaces the generated one.
    ///
    /// A custom setter is responsible for its own coercion.
    #[must_use]
    pub fn setter<F>(mut self, setter: F) -> Self
    where
        F: Fn(&mut BackingStore, Value) + Send + Sync + 'static,
    {
        self.descriptor.setter = Some(Arc::new(setter));
        self
    }

    /// Builds the [`PropertyDescriptor`].
    #[must_use]
    pub fn build(self) -> PropertyDescriptor {
        self.descriptor
    }
}

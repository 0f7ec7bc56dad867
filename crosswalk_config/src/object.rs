// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration objects.
//!
//! [`ConfigObject`] owns a [`BackingStore`] together with the
//! [`AccessorTable`] built over it, so the store's lifetime is the object's.

use alloc::string::String;

use crate::descriptor::{Getter, PropertyDescriptor, Setter};
use crate::error::ConfigError;
use crate::key::{ConfigKey, PropertyType};
use crate::store::BackingStore;
use crate::table::{AccessorTable, declare_property};
use crate::value::Value;

/// An object with a declared, typed configuration surface.
///
/// # Example
///
/// ```rust
/// use crosswalk_config::{ConfigObject, Value};
///
/// let mut config = ConfigObject::new();
/// let volume = config.property::<i64>("volume", 50_i64, "Playback volume")?;
/// assert_eq!(config.get(&volume)?, 50);
///
/// config.set(&volume, "75")?;
/// assert_eq!(config.get(&volume)?, 75);
///
/// config.set(&volume, "loud")?;
/// assert!(config.get_value("volume")?.is_nan());
/// assert!(config.get(&volume).is_err());
/// # Ok::<(), crosswalk_config::ConfigError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConfigObject {
    store: BackingStore,
    table: AccessorTable,
}

impl ConfigObject {
    /// Creates an object with an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an object over a store that may already hold raw values.
    ///
    /// Seeded values are coerced when their property is declared.
    #[must_use]
    pub fn with_store(store: BackingStore) -> Self {
        Self {
            store,
            table: AccessorTable::new(),
        }
    }

    /// Declares a property from a full descriptor.
    ///
    /// See [`declare_property`] for the precedence and default rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyName`] if the descriptor name is empty.
    pub fn declare(&mut self, descriptor: PropertyDescriptor) -> Result<(), ConfigError> {
        declare_property(&mut self.store, &mut self.table, descriptor)
    }

    /// Declares a property whose kind follows from `T` and returns its key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyName`] if `name` is empty.
    pub fn property<T: PropertyType>(
        &mut self,
        name: &str,
        default_value: impl Into<Value>,
        description: impl Into<String>,
    ) -> Result<ConfigKey<T>, ConfigError> {
        self.declare(PropertyDescriptor::new(
            name,
            T::KIND,
            default_value,
            description,
        ))?;
        Ok(ConfigKey::new(name))
    }

    /// Installs a custom getter before the property is declared.
    pub fn define_getter<F>(&mut self, name: impl Into<String>, getter: F) -> Getter
    where
        F: Fn(&BackingStore) -> Value + Send + Sync + 'static,
    {
        self.table.define_getter(name, getter)
    }

    /// Installs a custom setter before the property is declared.
    pub fn define_setter<F>(&mut self, name: impl Into<String>, setter: F) -> Setter
    where
        F: Fn(&mut BackingStore, Value) + Send + Sync + 'static,
    {
        self.table.define_setter(name, setter)
    }

    /// Reads a property through its typed key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Undeclared`] for unknown names,
    /// [`ConfigError::NotANumber`] when an integer property holds the
    /// sentinel, and [`ConfigError::TypeMismatch`] when a custom accessor
    /// produced a value of another type.
    pub fn get<T: PropertyType>(&self, key: &ConfigKey<T>) -> Result<T, ConfigError> {
        let value = self.get_value(key.name())?;
        T::from_value(key.name(), value)
    }

    /// Writes a raw value through a typed key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Undeclared`] for unknown names.
    pub fn set<T>(&mut self, key: &ConfigKey<T>, raw: impl Into<Value>) -> Result<(), ConfigError> {
        self.set_value(key.name(), raw)
    }

    /// Reads a property by name, without conversion.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Undeclared`] if no getter is installed.
    pub fn get_value(&self, name: &str) -> Result<Value, ConfigError> {
        self.table.get(&self.store, name)
    }

    /// Writes a raw value by name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Undeclared`] if no setter is installed.
    pub fn set_value(&mut self, name: &str, raw: impl Into<Value>) -> Result<(), ConfigError> {
        self.table.set(&mut self.store, name, raw.into())
    }

    /// Returns the description declared for `name`.
    #[must_use]
    pub fn description(&self, name: &str) -> Option<&str> {
        self.table.description(name)
    }

    /// Iterates over declared property names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.table.names()
    }

    /// Returns the backing store.
    #[must_use]
    pub fn store(&self) -> &BackingStore {
        &self.store
    }

    /// Returns the accessor table.
    #[must_use]
    pub fn table(&self) -> &AccessorTable {
        &self.table
    }
}

// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accessor tables and property declaration.
//!
//! An [`AccessorTable`] is the public accessor surface of a configuration
//! object: getters and setters keyed by property name, plus description
//! slots. [`declare_property`] installs one property on a table.

use alloc::format;
use alloc::string::String;
use hashbrown::HashMap;

use crate::descriptor::{Getter, PropertyDescriptor, Setter, generated_getter, generated_setter};
use crate::error::ConfigError;
use crate::kind::PropertyKind;
use crate::store::BackingStore;
use crate::value::Value;

/// Suffix of the documentation slot written for every declared property.
pub const DESCRIPTION_SUFFIX: &str = "_description";

/// Getters, setters and descriptions keyed by property name.
///
/// Accessors already present when a property is declared are kept; the
/// generated accessor is only installed for a missing half of the pair.
#[derive(Clone, Default)]
pub struct AccessorTable {
    getters: HashMap<String, Getter>,
    setters: HashMap<String, Setter>,
    kinds: HashMap<String, PropertyKind>,
    descriptions: HashMap<String, String>,
}

impl AccessorTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a custom getter for `name`, replacing any existing one.
    pub fn define_getter<F>(&mut self, name: impl Into<String>, getter: F) -> Getter
    where
        F: Fn(&BackingStore) -> Value + Send + Sync + 'static,
    {
        let getter: Getter = alloc::sync::Arc::new(getter);
        self.getters.insert(name.into(), getter.clone());
        getter
    }

    /// Installs a custom setter for `name`, replacing any existing one.
    pub fn define_setter<F>(&mut self, name: impl Into<String>, setter: F) -> Setter
    where
        F: Fn(&mut BackingStore, Value) + Send + Sync + 'static,
    {
        let setter: Setter = alloc::sync::Arc::new(setter);
        self.setters.insert(name.into(), setter.clone());
        setter
    }

    /// Returns the getter installed for `name`.
    #[must_use]
    pub fn getter(&self, name: &str) -> Option<&Getter> {
        self.getters.get(name)
    }

    /// Returns the setter installed for `name`.
    #[must_use]
    pub fn setter(&self, name: &str) -> Option<&Setter> {
        self.setters.get(name)
    }

    /// Returns the kind `name` was declared with.
    #[must_use]
    pub fn kind(&self, name: &str) -> Option<PropertyKind> {
        self.kinds.get(name).copied()
    }

    /// Returns the description declared for `name`.
    #[must_use]
    pub fn description(&self, name: &str) -> Option<&str> {
        self.doc_slot(&format!("{name}{DESCRIPTION_SUFFIX}"))
    }

    /// Returns the documentation slot stored under `key`.
    ///
    /// Slots are keyed `"<name>_description"`.
    #[must_use]
    pub fn doc_slot(&self, key: &str) -> Option<&str> {
        self.descriptions.get(key).map(String::as_str)
    }

    /// Returns `true` if `name` has been declared.
    #[must_use]
    pub fn is_declared(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }

    /// Iterates over declared property names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.kinds.keys().map(String::as_str)
    }

    /// Reads `name` through its getter.
    pub fn get(&self, store: &BackingStore, name: &str) -> Result<Value, ConfigError> {
        let getter = self.getter(name).ok_or_else(|| undeclared(name))?;
        Ok(getter(store))
    }

    /// Writes `raw` to `name` through its setter.
    pub fn set(&self, store: &mut BackingStore, name: &str, raw: Value) -> Result<(), ConfigError> {
        let setter = self.setter(name).ok_or_else(|| undeclared(name))?;
        setter(store, raw);
        Ok(())
    }
}

fn undeclared(name: &str) -> ConfigError {
    ConfigError::Undeclared { name: name.into() }
}

impl core::fmt::Debug for AccessorTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AccessorTable")
            .field("kinds", &self.kinds)
            .field("descriptions", &self.descriptions)
            .field("getters", &self.getters.len())
            .field("setters", &self.setters.len())
            .finish()
    }
}

/// Installs one typed, defaulted accessor pair on `table`, backed by `store`.
///
/// - The description is written to the `"<name>_description"` slot,
///   overwriting any previous one.
/// - Accessors already on the table are never replaced. A missing getter or
///   setter is filled with the one carried by `descriptor`, or else with the
///   generated one.
/// - The resolved setter then runs once: with the default if the store has
///   no value for the name, or with the stored value to re-apply coercion.
///
/// Re-declaring a name with the same kind is harmless; the default only
/// applies while the store is empty for that name.
///
/// # Errors
///
/// Returns [`ConfigError::EmptyName`] if the descriptor name is empty and
/// [`ConfigError::KindConflict`] if the name is already declared with a
/// different kind. The table and store are untouched in both cases.
///
/// # Example
///
/// ```rust
/// use crosswalk_config::{
///     AccessorTable, BackingStore, PropertyDescriptor, PropertyKind, Value, declare_property,
/// };
///
/// let mut store = BackingStore::new();
/// let mut table = AccessorTable::new();
/// declare_property(
///     &mut store,
///     &mut table,
///     PropertyDescriptor::new("volume", PropertyKind::Integer, 50_i64, "Playback volume"),
/// )?;
///
/// assert_eq!(table.get(&store, "volume")?, Value::Int(50));
/// table.set(&mut store, "volume", Value::from("75"))?;
/// assert_eq!(table.get(&store, "volume")?, Value::Int(75));
/// assert_eq!(table.description("volume"), Some("Playback volume"));
/// # Ok::<(), crosswalk_config::ConfigError>(())
/// ```
pub fn declare_property(
    store: &mut BackingStore,
    table: &mut AccessorTable,
    descriptor: PropertyDescriptor,
) -> Result<(), ConfigError> {
    let PropertyDescriptor {
        name,
        kind,
        default_value,
        description,
        getter,
        setter,
    } = descriptor;
    if name.is_empty() {
        return Err(ConfigError::EmptyName);
    }
    if let Some(declared) = table.kind(&name).filter(|declared| *declared != kind) {
        return Err(ConfigError::KindConflict {
            name,
            declared,
            requested: kind,
        });
    }

    table
        .descriptions
        .insert(format!("{name}{DESCRIPTION_SUFFIX}"), description);
    table.kinds.insert(name.clone(), kind);

    table
        .getters
        .entry(name.clone())
        .or_insert_with(|| getter.unwrap_or_else(|| generated_getter(&name)));
    let setter = table
        .setters
        .entry(name.clone())
        .or_insert_with(|| setter.unwrap_or_else(|| generated_setter(&name, kind)))
        .clone();

    let raw = match store.get(&name) {
        Some(existing) if !existing.is_undefined() => existing.clone(),
        _ => default_value,
    };
    setter(store, raw);
    Ok(())
}

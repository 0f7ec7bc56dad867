// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element lookup by id across document APIs.
//!
//! Documents resolve ids through `getElementById`, the `all` collection or
//! the `layers` collection, depending on their age. [`lookup_element`] uses
//! the first of those the document exposes and never falls through to a
//! later one on a miss.

use alloc::string::String;
use bitflags::bitflags;
use core::fmt;
use hashbrown::HashMap;

bitflags! {
    /// Id lookup mechanisms a document exposes.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct LookupCaps: u8 {
        /// `document.getElementById`.
        const BY_ID  = 0b0000_0001;
        /// `document.all`.
        const ALL    = 0b0000_0010;
        /// `document.layers`.
        const LAYERS = 0b0000_0100;
    }
}

/// A document whose elements can be found by id.
///
/// Every method is required. Only those matching
/// [`lookup_caps`](Self::lookup_caps) are called.
pub trait ElementDirectory {
    /// The element handle returned by lookups.
    type Element;

    /// The lookup mechanisms this document exposes.
    fn lookup_caps(&self) -> LookupCaps;

    /// `getElementById(id)`.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// `all[id]`.
    fn all(&self, id: &str) -> Option<Self::Element>;

    /// `layers[id]`.
    fn layers(&self, id: &str) -> Option<Self::Element>;
}

/// Finds the element with `id`.
///
/// Returns `None` if the element does not exist or the document exposes no
/// lookup mechanism.
///
/// ```
/// use crosswalk_env::{ElementTable, LookupCaps, lookup_element};
///
/// let mut doc = ElementTable::new(LookupCaps::ALL);
/// doc.insert("canvas", 3_u32);
/// assert_eq!(lookup_element(&doc, "canvas"), Some(3));
/// assert_eq!(lookup_element(&doc, "status"), None);
/// ```
pub fn lookup_element<D>(document: &D, id: &str) -> Option<D::Element>
where
    D: ElementDirectory + ?Sized,
{
    let caps = document.lookup_caps();
    if caps.contains(LookupCaps::BY_ID) {
        document.element_by_id(id)
    } else if caps.contains(LookupCaps::ALL) {
        document.all(id)
    } else if caps.contains(LookupCaps::LAYERS) {
        document.layers(id)
    } else {
        None
    }
}

/// An in-memory id directory exposing a chosen set of mechanisms.
///
/// Every exposed mechanism resolves against the same table.
#[derive(Clone)]
pub struct ElementTable<E> {
    caps: LookupCaps,
    elements: HashMap<String, E>,
}

impl<E> ElementTable<E> {
    /// Creates an empty table exposing `caps`.
    #[must_use]
    pub fn new(caps: LookupCaps) -> Self {
        Self {
            caps,
            elements: HashMap::new(),
        }
    }

    /// Registers `element` under `id`, returning the element it replaced.
    pub fn insert(&mut self, id: impl Into<String>, element: E) -> Option<E> {
        self.elements.insert(id.into(), element)
    }

    /// Removes the element registered under `id`.
    pub fn remove(&mut self, id: &str) -> Option<E> {
        self.elements.remove(id)
    }

    /// Number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if no elements are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn resolve(&self, mechanism: LookupCaps, id: &str) -> Option<E>
    where
        E: Clone,
    {
        if self.caps.contains(mechanism) {
            self.elements.get(id).cloned()
        } else {
            None
        }
    }
}

impl<E: Clone> ElementDirectory for ElementTable<E> {
    type Element = E;

    fn lookup_caps(&self) -> LookupCaps {
        self.caps
    }

    fn element_by_id(&self, id: &str) -> Option<E> {
        self.resolve(LookupCaps::BY_ID, id)
    }

    fn all(&self, id: &str) -> Option<E> {
        self.resolve(LookupCaps::ALL, id)
    }

    fn layers(&self, id: &str) -> Option<E> {
        self.resolve(LookupCaps::LAYERS, id)
    }
}

impl<E> fmt::Debug for ElementTable<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementTable")
            .field("caps", &self.caps)
            .field("len", &self.elements.len())
            .finish()
    }
}

// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element origins: cumulative offsets along the positioning-ancestor chain.
//!
//! ## Usage
//!
//! 1) Implement [`OffsetLookup`] over your element model (or pass a closure).
//! 2) Call [`element_origin`] whenever an element's page position is needed.
//!    The result is never cached, so layout changes are always reflected.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use crosswalk_pointer::origin::{OffsetInfo, element_origin};
//!
//! // 1 is the body; 2 sits at (10, 20) inside it; 3 at (5, 5) inside 2.
//! let layout = |id: u32| match id {
//!     3 => OffsetInfo::new(Vec2::new(5.0, 5.0), Some(2)),
//!     2 => OffsetInfo::new(Vec2::new(10.0, 20.0), Some(1)),
//!     _ => OffsetInfo::new(Vec2::ZERO, None),
//! };
//!
//! assert_eq!(element_origin(3, &layout), Point::new(15.0, 25.0));
//! assert_eq!(element_origin(1, &layout), Point::ORIGIN);
//! ```

use kurbo::{Point, Vec2};

/// An element's offset from its positioning ancestor, and that ancestor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OffsetInfo<K> {
    /// The element's `offsetLeft`/`offsetTop`.
    pub offset: Vec2,
    /// The element's `offsetParent`, if any.
    pub parent: Option<K>,
}

impl<K> OffsetInfo<K> {
    /// Creates offset information.
    #[must_use]
    pub const fn new(offset: Vec2, parent: Option<K>) -> Self {
        Self { offset, parent }
    }
}

/// Access to the positioning-ancestor relation of an element model.
///
/// The relation must be acyclic, as it is in a document tree.
pub trait OffsetLookup<K> {
    /// Returns the offset and positioning ancestor of `element`.
    fn offset_info(&self, element: K) -> OffsetInfo<K>;
}

impl<K, F> OffsetLookup<K> for F
where
    F: Fn(K) -> OffsetInfo<K>,
{
    #[inline]
    fn offset_info(&self, element: K) -> OffsetInfo<K> {
        self(element)
    }
}

/// Computes the cumulative offset of `element` from the document origin.
///
/// An element without a positioning ancestor reports the origin. Otherwise
/// the offsets of the element and of every ancestor up the chain are summed.
pub fn element_origin<K, L>(element: K, layout: &L) -> Point
where
    K: Copy,
    L: OffsetLookup<K> + ?Sized,
{
    let first = layout.offset_info(element);
    if first.parent.is_none() {
        return Point::ORIGIN;
    }
    let mut total = first.offset;
    let mut current = first.parent;
    while let Some(key) = current {
        let info = layout.offset_info(key);
        total += info.offset;
        current = info.parent;
    }
    total.to_point()
}

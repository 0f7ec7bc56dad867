// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element-local, scale-corrected event positions.
//!
//! Raw pointer events carry page-relative coordinates, client-relative
//! coordinates, or both. [`document_point`] resolves either into document
//! space, and [`event_position`] maps that into an element's content space.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use crosswalk_pointer::event::DomEvent;
//! use crosswalk_pointer::origin::OffsetInfo;
//! use crosswalk_pointer::position::{DocumentScroll, event_position};
//!
//! let layout = |id: u8| match id {
//!     1 => OffsetInfo::new(Vec2::new(20.0, 10.0), Some(0)),
//!     _ => OffsetInfo::new(Vec2::ZERO, None),
//! };
//! let scroll = DocumentScroll::default();
//! let event = DomEvent::standard().with_page(Point::new(120.0, 60.0));
//!
//! assert_eq!(event_position(&event, 1, &layout, &scroll, 1.0), Point::new(100.0, 50.0));
//! assert_eq!(event_position(&event, 1, &layout, &scroll, 2.0), Point::new(50.0, 25.0));
//! ```

use kurbo::{Point, Vec2};

use crate::origin::{OffsetLookup, element_origin};

/// Coordinate fields of a raw pointer event.
pub trait PointerCoordinates {
    /// Page-relative coordinates, when the event carries them.
    fn page(&self) -> Option<Point>;

    /// Client (viewport) relative coordinates, when the event carries them.
    fn client(&self) -> Option<Point>;
}

/// The document's scroll state.
pub trait ScrollSource {
    /// Total scroll offset added to client coordinates to reach page space.
    fn scroll_offset(&self) -> Vec2;
}

/// Scroll offsets of the document body and the document element.
///
/// Engines disagree about which of the two scrolls, so both are summed.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DocumentScroll {
    /// `body.scrollLeft`/`body.scrollTop`.
    pub body: Vec2,
    /// `documentElement.scrollLeft`/`documentElement.scrollTop`.
    pub document_element: Vec2,
}

impl DocumentScroll {
    /// Creates scroll state from both offsets.
    #[must_use]
    pub const fn new(body: Vec2, document_element: Vec2) -> Self {
        Self {
            body,
            document_element,
        }
    }
}

impl ScrollSource for DocumentScroll {
    #[inline]
    fn scroll_offset(&self) -> Vec2 {
        self.body + self.document_element
    }
}

impl ScrollSource for Vec2 {
    #[inline]
    fn scroll_offset(&self) -> Vec2 {
        *self
    }
}

/// Resolves an event's pointer position in document space.
///
/// Page coordinates win when present. Otherwise client coordinates are
/// shifted by the document scroll. An event with neither yields NaN
/// coordinates.
pub fn document_point<E, S>(event: &E, scroll: &S) -> Point
where
    E: PointerCoordinates + ?Sized,
    S: ScrollSource + ?Sized,
{
    if let Some(page) = event.page() {
        page
    } else if let Some(client) = event.client() {
        client + scroll.scroll_offset()
    } else {
        Point::new(f64::NAN, f64::NAN)
    }
}

/// Computes an event's position relative to `element`, divided by `scale`.
///
/// The element origin is recomputed on every call.
pub fn event_position<E, K, L, S>(
    event: &E,
    element: K,
    layout: &L,
    scroll: &S,
    scale: f64,
) -> Point
where
    E: PointerCoordinates + ?Sized,
    K: Copy,
    L: OffsetLookup<K> + ?Sized,
    S: ScrollSource + ?Sized,
{
    let local = document_point(event, scroll) - element_origin(element, layout);
    (local / scale).to_point()
}

/// [`event_position`] with a scale of `1.0`.
pub fn event_position_unscaled<E, K, L, S>(event: &E, element: K, layout: &L, scroll: &S) -> Point
where
    E: PointerCoordinates + ?Sized,
    K: Copy,
    L: OffsetLookup<K> + ?Sized,
    S: ScrollSource + ?Sized,
{
    event_position(event, element, layout, scroll, 1.0)
}

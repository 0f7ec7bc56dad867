// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A plain event record.
//!
//! [`DomEvent`] is a host-independent snapshot of a pointer event: its
//! coordinates, which standard control methods its engine provided, and the
//! resulting propagation state. Hosts with their own event types implement
//! [`PointerCoordinates`] and [`SuppressibleEvent`] directly instead.

use kurbo::Point;

use crate::position::PointerCoordinates;
use crate::suppress::{EventCaps, SuppressibleEvent};

/// A pointer event snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct DomEvent {
    page: Option<Point>,
    client: Option<Point>,
    caps: EventCaps,
    propagation_stopped: bool,
    default_prevented: bool,
    cancel_bubble: bool,
    return_value: bool,
}

impl DomEvent {
    /// An event from an engine with the given standard methods.
    #[must_use]
    pub fn with_capabilities(caps: EventCaps) -> Self {
        Self {
            page: None,
            client: None,
            caps,
            propagation_stopped: false,
            default_prevented: false,
            cancel_bubble: false,
            return_value: true,
        }
    }

    /// An event with both standard methods.
    #[must_use]
    pub fn standard() -> Self {
        Self::with_capabilities(EventCaps::all())
    }

    /// An event with only the legacy flags.
    #[must_use]
    pub fn legacy() -> Self {
        Self::with_capabilities(EventCaps::empty())
    }

    /// Sets page-relative coordinates.
    #[must_use]
    pub fn with_page(mut self, page: Point) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets client-relative coordinates.
    #[must_use]
    pub fn with_client(mut self, client: Point) -> Self {
        self.client = Some(client);
        self
    }

    /// Returns `true` once `stopPropagation()` has been called.
    #[must_use]
    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// Returns `true` once `preventDefault()` has been called.
    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    /// The legacy `cancelBubble` flag.
    #[must_use]
    pub fn cancel_bubble(&self) -> bool {
        self.cancel_bubble
    }

    /// The legacy `returnValue` flag.
    #[must_use]
    pub fn return_value(&self) -> bool {
        self.return_value
    }
}

impl Default for DomEvent {
    fn default() -> Self {
        Self::standard()
    }
}

impl PointerCoordinates for DomEvent {
    fn page(&self) -> Option<Point> {
        self.page
    }

    fn client(&self) -> Option<Point> {
        self.client
    }
}

impl SuppressibleEvent for DomEvent {
    fn capabilities(&self) -> EventCaps {
        self.caps
    }

    fn stop_propagation(&mut self) {
        debug_assert!(
            self.caps.contains(EventCaps::STOP_PROPAGATION),
            "stopPropagation() called on an event without it"
        );
        self.propagation_stopped = true;
    }

    fn prevent_default(&mut self) {
        debug_assert!(
            self.caps.contains(EventCaps::PREVENT_DEFAULT),
            "preventDefault() called on an event without it"
        );
        self.default_prevented = true;
    }

    fn set_cancel_bubble(&mut self, cancel: bool) {
        self.cancel_bubble = cancel;
    }

    fn set_return_value(&mut self, value: bool) {
        self.return_value = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_events_are_untouched() {
        for event in [DomEvent::standard(), DomEvent::legacy()] {
            assert!(!event.propagation_stopped());
            assert!(!event.default_prevented());
            assert!(!event.cancel_bubble());
            assert!(event.return_value());
            assert_eq!(event.page(), None);
            assert_eq!(event.client(), None);
        }
    }

    #[test]
    fn capabilities_follow_constructor() {
        assert_eq!(DomEvent::standard().capabilities(), EventCaps::all());
        assert_eq!(DomEvent::legacy().capabilities(), EventCaps::empty());
        assert_eq!(DomEvent::default(), DomEvent::standard());
    }

    #[test]
    fn coordinates_are_kept() {
        let event = DomEvent::legacy()
            .with_page(Point::new(1.0, 2.0))
            .with_client(Point::new(3.0, 4.0));
        assert_eq!(event.page(), Some(Point::new(1.0, 2.0)));
        assert_eq!(event.client(), Some(Point::new(3.0, 4.0)));
    }
}

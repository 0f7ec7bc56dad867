// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A viewport-bound helper combining layout, scroll and scale.

use kurbo::Point;

use crosswalk_log::Logger;

use crate::origin::{OffsetLookup, element_origin};
use crate::position::{PointerCoordinates, ScrollSource, document_point};
use crate::suppress::{SuppressibleEvent, Suppression, suppress};

/// Maps raw events into one viewport's element-local coordinates.
///
/// Holds the layout lookup, the document scroll source and the display
/// scale so call sites only pass the event and the element.
///
/// ```
/// use kurbo::{Point, Vec2};
/// use crosswalk_log::{Level, Logger, NullSink};
/// use crosswalk_pointer::adapter::ViewportEventAdapter;
/// use crosswalk_pointer::event::DomEvent;
/// use crosswalk_pointer::origin::OffsetInfo;
///
/// let layout = |id: u8| match id {
///     1 => OffsetInfo::new(Vec2::new(10.0, 10.0), Some(0)),
///     _ => OffsetInfo::new(Vec2::ZERO, None),
/// };
/// let adapter = ViewportEventAdapter::new(layout, Vec2::ZERO, Logger::new(Level::None, NullSink))
///     .with_scale(2.0);
///
/// let event = DomEvent::standard().with_page(Point::new(30.0, 50.0));
/// assert_eq!(adapter.event_position(&event, 1), Point::new(10.0, 20.0));
/// ```
#[derive(Clone, Debug)]
pub struct ViewportEventAdapter<L, S> {
    layout: L,
    scroll: S,
    scale: f64,
    logger: Logger,
}

impl<L, S> ViewportEventAdapter<L, S> {
    /// Creates an adapter with a scale of `1.0`.
    #[must_use]
    pub fn new(layout: L, scroll: S, logger: Logger) -> Self {
        Self {
            layout,
            scroll,
            scale: 1.0,
            logger,
        }
    }

    /// Sets the display scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Replaces the display scale.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    /// Returns the display scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the scroll source.
    pub fn scroll_mut(&mut self) -> &mut S {
        &mut self.scroll
    }

    /// Returns the logger.
    #[must_use]
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Computes the document origin of `element`.
    pub fn element_origin<K>(&self, element: K) -> Point
    where
        K: Copy,
        L: OffsetLookup<K>,
    {
        element_origin(element, &self.layout)
    }

    /// Computes the scaled position of `event` relative to `element`.
    ///
    /// Events without coordinates yield NaN and are reported on the warn
    /// channel.
    pub fn event_position<E, K>(&self, event: &E, element: K) -> Point
    where
        E: PointerCoordinates + ?Sized,
        K: Copy,
        L: OffsetLookup<K>,
        S: ScrollSource,
    {
        if event.page().is_none() && event.client().is_none() {
            self.logger
                .warn("pointer event has neither page nor client coordinates");
        }
        let local = document_point(event, &self.scroll) - self.element_origin(element);
        let position = (local / self.scale).to_point();
        self.logger.debug(format_args!(
            "event position ({}, {}) at scale {}",
            position.x, position.y, self.scale
        ));
        position
    }

    /// Stops propagation and default handling of `event`.
    pub fn suppress<E>(&self, event: &mut E) -> Suppression
    where
        E: SuppressibleEvent + ?Sized,
    {
        let report = suppress(event);
        self.logger.debug(format_args!("event suppressed: {report:?}"));
        report
    }
}

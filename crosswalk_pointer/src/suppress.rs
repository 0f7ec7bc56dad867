// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stopping propagation and default handling across event APIs.
//!
//! Standard events expose `stopPropagation()` and `preventDefault()`.
//! Legacy events only have the `cancelBubble` and `returnValue` flags. An
//! event may offer one standard method but not the other, so each half of
//! [`suppress`] picks its mechanism independently.

use bitflags::bitflags;

bitflags! {
    /// Standard event-control methods an event exposes.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EventCaps: u8 {
        /// The event has `stopPropagation()`.
        const STOP_PROPAGATION = 0b0000_0001;
        /// The event has `preventDefault()`.
        const PREVENT_DEFAULT  = 0b0000_0010;
    }
}

impl Default for EventCaps {
    fn default() -> Self {
        Self::all()
    }
}

/// An event whose propagation and default action can be cancelled.
///
/// The legacy flag setters must always work; the standard methods are only
/// called when [`capabilities`](Self::capabilities) reports them.
pub trait SuppressibleEvent {
    /// The standard methods this event exposes.
    fn capabilities(&self) -> EventCaps;

    /// Standard `stopPropagation()`.
    fn stop_propagation(&mut self);

    /// Standard `preventDefault()`.
    fn prevent_default(&mut self);

    /// Legacy `cancelBubble` flag.
    fn set_cancel_bubble(&mut self, cancel: bool);

    /// Legacy `returnValue` flag; `false` cancels the default action.
    fn set_return_value(&mut self, value: bool);
}

/// Which mechanism handled one half of a suppression.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SuppressPath {
    /// A standard method was called.
    Standard,
    /// A legacy flag was set.
    LegacyFlag,
}

/// What [`suppress`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Suppression {
    /// How propagation was stopped.
    pub propagation: SuppressPath,
    /// How the default action was cancelled.
    pub default_action: SuppressPath,
}

/// Stops propagation and cancels default handling of `event`.
///
/// ```
/// use crosswalk_pointer::event::DomEvent;
/// use crosswalk_pointer::suppress::{SuppressPath, suppress};
///
/// let mut event = DomEvent::legacy();
/// let report = suppress(&mut event);
/// assert_eq!(report.propagation, SuppressPath::LegacyFlag);
/// assert!(event.cancel_bubble());
/// assert!(!event.return_value());
/// ```
pub fn suppress<E: SuppressibleEvent + ?Sized>(event: &mut E) -> Suppression {
    let caps = event.capabilities();

    let propagation = if caps.contains(EventCaps::STOP_PROPAGATION) {
        event.stop_propagation();
        SuppressPath::Standard
    } else {
        event.set_cancel_bubble(true);
        SuppressPath::LegacyFlag
    };

    let default_action = if caps.contains(EventCaps::PREVENT_DEFAULT) {
        event.prevent_default();
        SuppressPath::Standard
    } else {
        event.set_return_value(false);
        SuppressPath::LegacyFlag
    };

    Suppression {
        propagation,
        default_action,
    }
}

// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener registration across event APIs.
//!
//! Event targets expose either the legacy `attachEvent`/`detachEvent` pair
//! (which takes `"on"`-prefixed type names) or the standard
//! `addEventListener`/`removeEventListener` pair. [`attach`] and [`detach`]
//! probe the target on every call; a [`ListenerBinding`] probes once and
//! reuses the selected mechanism.
//!
//! ## Minimal example
//!
//! ```
//! use crosswalk_pointer::listener::{EventTarget, ListenerCaps, attach, detach};
//!
//! #[derive(Default)]
//! struct Canvas {
//!     listeners: Vec<(String, u32)>,
//! }
//!
//! impl EventTarget<u32> for Canvas {
//!     fn listener_caps(&self) -> ListenerCaps {
//!         ListenerCaps::STANDARD
//!     }
//!
//!     fn attach_event(&mut self, _on_type: &str, _handler: u32) -> bool {
//!         false
//!     }
//!
//!     fn detach_event(&mut self, _on_type: &str, _handler: &u32) -> bool {
//!         false
//!     }
//!
//!     fn add_event_listener(&mut self, event_type: &str, handler: u32, _capture: bool) {
//!         self.listeners.push((event_type.into(), handler));
//!     }
//!
//!     fn remove_event_listener(&mut self, event_type: &str, handler: &u32, _capture: bool) {
//!         self.listeners.retain(|(t, h)| !(t == event_type && h == handler));
//!     }
//! }
//!
//! let mut canvas = Canvas::default();
//! assert_eq!(attach(&mut canvas, "mousedown", 7_u32), Ok(true));
//! assert_eq!(canvas.listeners, [("mousedown".to_string(), 7)]);
//! assert_eq!(detach(&mut canvas, "mousedown", &7_u32), Ok(true));
//! assert!(canvas.listeners.is_empty());
//! ```

use alloc::format;
use bitflags::bitflags;
use core::fmt;

use crosswalk_log::Logger;

bitflags! {
    /// Listener-registration mechanisms a target exposes.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ListenerCaps: u8 {
        /// `attachEvent`/`detachEvent`.
        const LEGACY   = 0b0000_0001;
        /// `addEventListener`/`removeEventListener`.
        const STANDARD = 0b0000_0010;
    }
}

/// An object listeners can be registered on.
///
/// Every method is required. Only those matching
/// [`listener_caps`](Self::listener_caps) are ever called, so a target
/// lacking one API can implement that pair as a no-op.
pub trait EventTarget<H> {
    /// The registration mechanisms this target exposes.
    fn listener_caps(&self) -> ListenerCaps;

    /// Legacy registration. `on_type` is the `"on"`-prefixed event name.
    ///
    /// Returns the target's own success flag.
    fn attach_event(&mut self, on_type: &str, handler: H) -> bool;

    /// Legacy removal. `on_type` is the `"on"`-prefixed event name.
    fn detach_event(&mut self, on_type: &str, handler: &H) -> bool;

    /// Standard registration.
    fn add_event_listener(&mut self, event_type: &str, handler: H, use_capture: bool);

    /// Standard removal.
    fn remove_event_listener(&mut self, event_type: &str, handler: &H, use_capture: bool);
}

/// A registration mechanism.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mechanism {
    /// `attachEvent`/`detachEvent`.
    Legacy,
    /// `addEventListener`/`removeEventListener`.
    Standard,
}

impl Mechanism {
    /// Selects a mechanism from a capability set, preferring the legacy one.
    #[must_use]
    pub fn probe(caps: ListenerCaps) -> Option<Self> {
        if caps.contains(ListenerCaps::LEGACY) {
            Some(Self::Legacy)
        } else if caps.contains(ListenerCaps::STANDARD) {
            Some(Self::Standard)
        } else {
            None
        }
    }

    fn caps(self) -> ListenerCaps {
        match self {
            Self::Legacy => ListenerCaps::LEGACY,
            Self::Standard => ListenerCaps::STANDARD,
        }
    }
}

/// Which registration operation failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Adding a listener.
    Attach,
    /// Removing a listener.
    Detach,
}

/// Error returned when a listener cannot be registered or removed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RegistrationError {
    /// The target exposes no registration mechanism.
    NoMechanism {
        /// The operation attempted.
        operation: Operation,
    },
    /// The target no longer exposes the mechanism a binding selected.
    MechanismLost {
        /// The operation attempted.
        operation: Operation,
        /// The mechanism the binding selected.
        mechanism: Mechanism,
    },
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = |op: &Operation| match op {
            Operation::Attach => "attached",
            Operation::Detach => "removed",
        };
        match self {
            Self::NoMechanism { operation } => {
                write!(
                    f,
                    "handler could not be {}: no registration mechanism available",
                    verb(operation)
                )
            }
            Self::MechanismLost {
                operation,
                mechanism,
            } => write!(
                f,
                "handler could not be {}: target no longer supports the {mechanism:?} mechanism",
                verb(operation)
            ),
        }
    }
}

impl core::error::Error for RegistrationError {}

fn dispatch_attach<H, T>(
    target: &mut T,
    mechanism: Mechanism,
    event_type: &str,
    handler: H,
) -> bool
where
    T: EventTarget<H> + ?Sized,
{
    match mechanism {
        Mechanism::Legacy => target.attach_event(&format!("on{event_type}"), handler),
        Mechanism::Standard => {
            target.add_event_listener(event_type, handler, false);
            true
        }
    }
}

fn dispatch_detach<H, T>(
    target: &mut T,
    mechanism: Mechanism,
    event_type: &str,
    handler: &H,
) -> bool
where
    T: EventTarget<H> + ?Sized,
{
    match mechanism {
        Mechanism::Legacy => target.detach_event(&format!("on{event_type}"), handler),
        Mechanism::Standard => {
            target.remove_event_listener(event_type, handler, false);
            true
        }
    }
}

/// Registers `handler` for `event_type` on `target`.
///
/// Exactly one mechanism is used: legacy if present, otherwise standard.
/// Returns the legacy API's success flag, or `true` for the standard API.
///
/// # Errors
///
/// Returns [`RegistrationError::NoMechanism`] if the target exposes neither.
pub fn attach<H, T>(
    target: &mut T,
    event_type: &str,
    handler: H,
) -> Result<bool, RegistrationError>
where
    T: EventTarget<H> + ?Sized,
{
    let mechanism = Mechanism::probe(target.listener_caps()).ok_or(
        RegistrationError::NoMechanism {
            operation: Operation::Attach,
        },
    )?;
    Ok(dispatch_attach(target, mechanism, event_type, handler))
}

/// Unregisters `handler` for `event_type` on `target`.
///
/// # Errors
///
/// Returns [`RegistrationError::NoMechanism`] if the target exposes neither
/// mechanism.
pub fn detach<H, T>(
    target: &mut T,
    event_type: &str,
    handler: &H,
) -> Result<bool, RegistrationError>
where
    T: EventTarget<H> + ?Sized,
{
    let mechanism = Mechanism::probe(target.listener_caps()).ok_or(
        RegistrationError::NoMechanism {
            operation: Operation::Detach,
        },
    )?;
    Ok(dispatch_detach(target, mechanism, event_type, handler))
}

/// A registration mechanism selected once and reused.
///
/// Failures are reported to the binding's logger on its error channel.
#[derive(Clone, Debug)]
pub struct ListenerBinding {
    mechanism: Mechanism,
    logger: Logger,
}

impl ListenerBinding {
    /// Probes `target` and binds to its mechanism.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::NoMechanism`] if the target exposes
    /// neither mechanism.
    pub fn probe<H, T>(target: &T, logger: Logger) -> Result<Self, RegistrationError>
    where
        T: EventTarget<H> + ?Sized,
    {
        match Mechanism::probe(target.listener_caps()) {
            Some(mechanism) => {
                logger.debug(format_args!("listener mechanism selected: {mechanism:?}"));
                Ok(Self { mechanism, logger })
            }
            None => {
                let err = RegistrationError::NoMechanism {
                    operation: Operation::Attach,
                };
                logger.error(&err);
                Err(err)
            }
        }
    }

    /// Returns the selected mechanism.
    #[must_use]
    pub fn mechanism(&self) -> Mechanism {
        self.mechanism
    }

    fn check<H, T>(&self, target: &T, operation: Operation) -> Result<(), RegistrationError>
    where
        T: EventTarget<H> + ?Sized,
    {
        if target.listener_caps().contains(self.mechanism.caps()) {
            Ok(())
        } else {
            let err = RegistrationError::MechanismLost {
                operation,
                mechanism: self.mechanism,
            };
            self.logger.error(&err);
            Err(err)
        }
    }

    /// Registers `handler` using the bound mechanism.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::MechanismLost`] if `target` does not
    /// expose the bound mechanism.
    pub fn attach<H, T>(
        &self,
        target: &mut T,
        event_type: &str,
        handler: H,
    ) -> Result<bool, RegistrationError>
    where
        T: EventTarget<H> + ?Sized,
    {
        self.check::<H, T>(target, Operation::Attach)?;
        Ok(dispatch_attach(target, self.mechanism, event_type, handler))
    }

    /// Unregisters `handler` using the bound mechanism.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::MechanismLost`] if `target` does not
    /// expose the bound mechanism.
    pub fn detach<H, T>(
        &self,
        target: &mut T,
        event_type: &str,
        handler: &H,
    ) -> Result<bool, RegistrationError>
    where
        T: EventTarget<H> + ?Sized,
    {
        self.check::<H, T>(target, Operation::Detach)?;
        Ok(dispatch_detach(target, self.mechanism, event_type, handler))
    }
}

// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crosswalk Pointer: element-relative pointer positions and event-API
//! normalization.
//!
//! Browser engines disagree about how pointer events are described and how
//! listeners are registered. This crate hides those differences behind small
//! traits that a host implements over its own element and event types:
//!
//! - [`origin`]: cumulative element offsets along the positioning-ancestor chain.
//! - [`position`]: page/client coordinate resolution, scroll and display scale.
//! - [`listener`]: listener registration through whichever API a target exposes.
//! - [`suppress`]: stopping propagation and default handling with methods or legacy flags.
//! - [`event`]: a plain [`DomEvent`](event::DomEvent) record implementing the event traits.
//! - [`adapter`]: a viewport-bound helper that logs through `crosswalk_log`.
//!
//! Nothing is cached: every position query walks the current layout.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use crosswalk_pointer::event::DomEvent;
//! use crosswalk_pointer::origin::OffsetInfo;
//! use crosswalk_pointer::position::{DocumentScroll, event_position};
//! use crosswalk_pointer::suppress::{SuppressPath, suppress};
//!
//! // Element 2 sits at (15, 25) in the document.
//! let layout = |id: u32| match id {
//!     2 => OffsetInfo::new(Vec2::new(10.0, 20.0), Some(1)),
//!     1 => OffsetInfo::new(Vec2::new(5.0, 5.0), None),
//!     _ => OffsetInfo::new(Vec2::ZERO, None),
//! };
//!
//! // A legacy event with client coordinates and a scrolled body.
//! let mut event = DomEvent::legacy().with_client(Point::new(40.0, 30.0));
//! let scroll = DocumentScroll::new(Vec2::new(0.0, 15.0), Vec2::ZERO);
//!
//! assert_eq!(event_position(&event, 2, &layout, &scroll, 1.0), Point::new(25.0, 20.0));
//! assert_eq!(suppress(&mut event).default_action, SuppressPath::LegacyFlag);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: forwards to `kurbo/libm` for `no_std` builds.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod adapter;
pub mod event;
pub mod listener;
pub mod origin;
pub mod position;
pub mod suppress;

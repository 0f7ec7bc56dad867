// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crosswalk Log: an injected, four-channel logger.
//!
//! Components that want to log take a [`Logger`] at construction. A logger
//! has one [`Channel`] per [`Severity`] (`debug`, `info`, `warn`, `error`),
//! each enabled or disabled by a single ordered [`Level`]:
//!
//! ```text
//! none < error < warn < info < debug
//! ```
//!
//! The level is fixed for the lifetime of a logger. Changing verbosity means
//! building a new logger with [`Logger::reconfigure`]; anything still holding
//! a channel from the old logger keeps the old behavior.
//!
//! Enabled channels write to a [`LogSink`]. [`LogCrateSink`] forwards to the
//! `log` facade, so the host picks the backend; [`NullSink`] drops
//! everything.
//!
//! ## Example
//!
//! ```rust
//! use crosswalk_log::{Level, Logger, LogCrateSink};
//!
//! let logger = Logger::new(Level::Info, LogCrateSink::default());
//! logger.info("connected");
//!
//! let quiet = logger.reconfigure(Level::Error);
//! assert_eq!(quiet.level(), Level::Error);
//! ```
//!
//! Unknown level names are rejected with [`InvalidLevel`]:
//!
//! ```rust
//! use crosswalk_log::{Logger, NullSink};
//!
//! assert!(Logger::from_name("trace", NullSink).is_err());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod level;
mod logger;
mod sink;

pub use level::{InvalidLevel, Level, Severity};
pub use logger::{Channel, Logger};
pub use sink::{LogCrateSink, LogSink, NullSink};

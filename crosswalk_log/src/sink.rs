// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Log sinks: where enabled channels send their messages.

use core::fmt;

use crate::level::Severity;

/// Destination for log messages.
///
/// A sink receives only messages whose channel is enabled; filtering is done
/// by the [`Logger`](crate::Logger) before the sink is called.
pub trait LogSink: Send + Sync {
    /// Writes one message.
    fn write(&self, severity: Severity, message: fmt::Arguments<'_>);
}

/// Forwards messages to the `log` facade.
///
/// Debug and Info map to the matching `log` levels, as do Warn and Error.
/// Installing a `log` backend is up to the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LogCrateSink {
    target: &'static str,
}

impl LogCrateSink {
    /// The default `log` target.
    pub const DEFAULT_TARGET: &'static str = "crosswalk";

    /// Creates a sink that logs under `target`.
    #[must_use]
    pub const fn new(target: &'static str) -> Self {
        Self { target }
    }

    /// Returns the `log` target.
    #[must_use]
    pub const fn target(&self) -> &'static str {
        self.target
    }
}

impl Default for LogCrateSink {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TARGET)
    }
}

impl LogSink for LogCrateSink {
    fn write(&self, severity: Severity, message: fmt::Arguments<'_>) {
        match severity {
            Severity::Error => log::error!(target: self.target, "{message}"),
            Severity::Warn => log::warn!(target: self.target, "{message}"),
            Severity::Info => log::info!(target: self.target, "{message}"),
            Severity::Debug => log::debug!(target: self.target, "{message}"),
        }
    }
}

/// Drops every message. Used when the host has no console at all.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NullSink;

impl LogSink for NullSink {
    fn write(&self, _severity: Severity, _message: fmt::Arguments<'_>) {}
}

impl<F> LogSink for F
where
    F: Fn(Severity, fmt::Arguments<'_>) + Send + Sync,
{
    #[inline]
    fn write(&self, severity: Severity, message: fmt::Arguments<'_>) {
        self(severity, message);
    }
}

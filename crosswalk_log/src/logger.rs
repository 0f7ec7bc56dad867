// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The injected logger and its channels.

use alloc::sync::Arc;
use core::fmt;

use crate::level::{InvalidLevel, Level, Severity};
use crate::sink::{LogCrateSink, LogSink};

/// One severity channel.
///
/// A disabled channel holds no sink and does nothing. Channels are cheap to
/// clone; a clone keeps the behavior it was created with even after the
/// logger it came from has been reconfigured.
#[derive(Clone)]
pub struct Channel {
    severity: Severity,
    sink: Option<Arc<dyn LogSink>>,
}

impl Channel {
    fn new(severity: Severity, level: Level, sink: &Arc<dyn LogSink>) -> Self {
        Self {
            severity,
            sink: level.enables(severity).then(|| sink.clone()),
        }
    }

    /// Returns the severity carried by this channel.
    #[must_use]
    #[inline]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns `true` if messages sent here reach the sink.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Sends a message, or does nothing if the channel is disabled.
    #[inline]
    pub fn log(&self, message: impl fmt::Display) {
        if let Some(sink) = &self.sink {
            sink.write(self.severity, format_args!("{message}"));
        }
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("severity", &self.severity)
            .field("enabled", &self.sink.is_some())
            .finish()
    }
}

/// A logger with four independent severity channels.
///
/// The verbosity level is fixed at construction. [`Logger::reconfigure`]
/// returns a new logger; channels captured from the old one are unaffected.
///
/// # Example
///
/// ```rust
/// use crosswalk_log::{Logger, NullSink};
///
/// let logger = Logger::from_name("warn", NullSink)?;
/// assert!(logger.channel(crosswalk_log::Severity::Warn).is_enabled());
/// assert!(!logger.channel(crosswalk_log::Severity::Debug).is_enabled());
///
/// logger.warn("falling back to the legacy listener API");
/// logger.debug("dropped");
/// # Ok::<(), crosswalk_log::InvalidLevel>(())
/// ```
#[derive(Clone)]
pub struct Logger {
    level: Level,
    sink: Arc<dyn LogSink>,
    error: Channel,
    warn: Channel,
    info: Channel,
    debug: Channel,
}

impl Logger {
    /// Creates a logger at `level` writing enabled channels to `sink`.
    #[must_use]
    pub fn new(level: Level, sink: impl LogSink + 'static) -> Self {
        Self::with_shared_sink(level, Arc::new(sink))
    }

    /// Creates a logger over an already shared sink.
    #[must_use]
    pub fn with_shared_sink(level: Level, sink: Arc<dyn LogSink>) -> Self {
        Self {
            level,
            error: Channel::new(Severity::Error, level, &sink),
            warn: Channel::new(Severity::Warn, level, &sink),
            info: Channel::new(Severity::Info, level, &sink),
            debug: Channel::new(Severity::Debug, level, &sink),
            sink,
        }
    }

    /// Creates a logger from a level name.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidLevel`] if `name` is not one of `none`, `error`,
    /// `warn`, `info` or `debug`.
    pub fn from_name(name: &str, sink: impl LogSink + 'static) -> Result<Self, InvalidLevel> {
        Ok(Self::new(name.parse()?, sink))
    }

    /// Returns a logger with the same sink at a different level.
    #[must_use]
    pub fn reconfigure(&self, level: Level) -> Self {
        Self::with_shared_sink(level, self.sink.clone())
    }

    /// Returns the verbosity level.
    #[must_use]
    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the channel for `severity`.
    #[must_use]
    pub fn channel(&self, severity: Severity) -> &Channel {
        match severity {
            Severity::Error => &self.error,
            Severity::Warn => &self.warn,
            Severity::Info => &self.info,
            Severity::Debug => &self.debug,
        }
    }

    /// Logs to the debug channel.
    #[inline]
    pub fn debug(&self, message: impl fmt::Display) {
        self.debug.log(message);
    }

    /// Logs to the info channel.
    #[inline]
    pub fn info(&self, message: impl fmt::Display) {
        self.info.log(message);
    }

    /// Logs to the warn channel.
    #[inline]
    pub fn warn(&self, message: impl fmt::Display) {
        self.warn.log(message);
    }

    /// Logs to the error channel.
    #[inline]
    pub fn error(&self, message: impl fmt::Display) {
        self.error.log(message);
    }
}

impl Default for Logger {
    /// A `warn` logger forwarding to the `log` facade.
    fn default() -> Self {
        Self::new(Level::default(), LogCrateSink::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("error", &self.error)
            .field("warn", &self.warn)
            .field("info", &self.info)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Verbosity levels and message severities.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

/// The severity of one message, and the name of the channel carrying it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Failures.
    Error,
    /// Suspicious conditions.
    Warn,
    /// Progress information.
    Info,
    /// Detailed tracing.
    Debug,
}

impl Severity {
    /// All severities, most severe first.
    pub const ALL: [Self; 4] = [Self::Error, Self::Warn, Self::Info, Self::Debug];

    /// Returns the lowercase name of this severity.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

/// An ordered verbosity level: `None < Error < Warn < Info < Debug`.
///
/// A level enables every channel whose severity is at or above it in
/// importance.
///
/// ```rust
/// use crosswalk_log::{Level, Severity};
///
/// let level: Level = "warn".parse()?;
/// assert!(level.enables(Severity::Error));
/// assert!(level.enables(Severity::Warn));
/// assert!(!level.enables(Severity::Debug));
/// assert!("verbose".parse::<Level>().is_err());
/// # Ok::<(), crosswalk_log::InvalidLevel>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Every channel is disabled.
    None,
    /// Only errors.
    Error,
    /// Errors and warnings.
    #[default]
    Warn,
    /// Errors, warnings and information.
    Info,
    /// Everything.
    Debug,
}

impl Level {
    /// Returns `true` if messages of `severity` pass at this level.
    #[must_use]
    pub fn enables(self, severity: Severity) -> bool {
        let needed = match severity {
            Severity::Error => Self::Error,
            Severity::Warn => Self::Warn,
            Severity::Info => Self::Info,
            Severity::Debug => Self::Debug,
        };
        self >= needed
    }

    /// Returns the lowercase name of this level.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }

    /// Returns the matching `log` crate filter.
    #[must_use]
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::None => log::LevelFilter::Off,
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = InvalidLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            other => Err(InvalidLevel {
                name: String::from(other),
            }),
        }
    }
}

/// Error returned for a logging level name that is not recognized.
///
/// This is a configuration error; callers are expected to surface it
/// immediately.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidLevel {
    /// The rejected name.
    pub name: String,
}

impl fmt::Display for InvalidLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid logging type '{}'", self.name)
    }
}

impl core::error::Error for InvalidLevel {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn levels_are_ordered() {
        assert!(Level::None < Level::Error);
        assert!(Level::Error < Level::Warn);
        assert!(Level::Warn < Level::Info);
        assert!(Level::Info < Level::Debug);
        assert_eq!(Level::default(), Level::Warn);
    }

    #[test]
    fn enables_matrix() {
        for severity in Severity::ALL {
            assert!(!Level::None.enables(severity));
            assert!(Level::Debug.enables(severity));
        }
        assert!(Level::Error.enables(Severity::Error));
        assert!(!Level::Error.enables(Severity::Warn));
        assert!(Level::Info.enables(Severity::Info));
        assert!(!Level::Info.enables(Severity::Debug));
    }

    #[test]
    fn parse_round_trips_names() {
        for level in [
            Level::None,
            Level::Error,
            Level::Warn,
            Level::Info,
            Level::Debug,
        ] {
            assert_eq!(level.name().parse::<Level>(), Ok(level));
            assert_eq!(level.to_string(), level.name());
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "WARN".parse::<Level>().unwrap_err();
        assert_eq!(err.name, "WARN");
        assert_eq!(err.to_string(), "invalid logging type 'WARN'");
    }

    #[test]
    fn level_filters() {
        assert_eq!(Level::None.to_level_filter(), log::LevelFilter::Off);
        assert_eq!(Level::Debug.to_level_filter(), log::LevelFilter::Debug);
    }
}

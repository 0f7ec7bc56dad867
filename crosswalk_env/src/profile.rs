// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host profile computed once at startup.

use crosswalk_log::Logger;

use crate::engine::EngineVersions;
use crate::plugin::PluginVersion;
use crate::surface::{Features, HostSurface};

/// Static facts about the host environment.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct HostProfile {
    /// The raw host surface.
    pub surface: HostSurface,
    /// Derived feature flags.
    pub features: Features,
    /// Derived engine versions.
    pub engines: EngineVersions,
    /// Flash plugin version.
    pub plugin: PluginVersion,
}

impl HostProfile {
    /// Derives a profile from the host surface and plugin version.
    ///
    /// ```
    /// use crosswalk_env::{HostProfile, HostSurface, PluginVersion};
    ///
    /// let surface = HostSurface::EVALUATE | HostSurface::QUERY_SELECTOR;
    /// let profile = HostProfile::detect(surface, PluginVersion::detect(None, None));
    /// assert_eq!(profile.engines.webkit, Some(525));
    /// assert!(profile.features.query);
    /// ```
    #[must_use]
    pub fn detect(surface: HostSurface, plugin: PluginVersion) -> Self {
        Self {
            surface,
            features: Features::detect(surface),
            engines: EngineVersions::detect(surface),
            plugin,
        }
    }

    /// Writes the profile to the info channel of `logger`.
    pub fn report(&self, logger: &Logger) {
        let Features { xpath, air, query } = self.features;
        logger.info(format_args!(
            "features: xpath={xpath} air={air} query={query}"
        ));
        let EngineVersions {
            presto,
            trident,
            webkit,
            gecko,
        } = self.engines;
        logger.info(format_args!(
            "engines: presto={presto:?} trident={trident:?} webkit={webkit:?} gecko={gecko:?}"
        ));
        if self.plugin.is_present() {
            logger.info(format_args!(
                "flash: {} r{}",
                self.plugin.version, self.plugin.build
            ));
        } else {
            logger.debug("flash: not present");
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use alloc::string::{String, ToString};
    use alloc::sync::Arc;
    use alloc::vec::Vec;
    use core::fmt;
    use crosswalk_log::{Level, LogSink, Severity};
    use std::sync::Mutex;

    #[derive(Default)]
    struct Lines(Mutex<Vec<String>>);

    impl LogSink for Lines {
        fn write(&self, _: Severity, message: fmt::Arguments<'_>) {
            self.0.lock().unwrap().push(message.to_string());
        }
    }

    #[test]
    fn detect_combines_probes() {
        let surface = HostSurface::OPERA | HostSurface::TAINT_ENABLED;
        let plugin = PluginVersion::parse("Shockwave Flash 10.0 r32");
        let profile = HostProfile::detect(surface, plugin);
        assert_eq!(profile.engines.presto, Some(925));
        assert_eq!(profile.engines.webkit, None);
        assert_eq!(profile.features, Features::default());
        assert_eq!(profile.plugin.build, 32);
        assert_eq!(profile.surface, surface);
    }

    #[test]
    fn report_goes_to_info() {
        let lines = Arc::new(Lines::default());
        let logger = Logger::with_shared_sink(Level::Info, lines.clone());
        let profile = HostProfile::detect(
            HostSurface::MOZ_INNER_SCREEN_X,
            PluginVersion::parse("Shockwave Flash 10.0 r32"),
        );
        profile.report(&logger);

        let lines = lines.0.lock().unwrap().clone();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("gecko=Some(18)"), "got {lines:?}");
        assert_eq!(lines[2], "flash: 10 r32");
    }

    #[test]
    fn report_respects_level() {
        let lines = Arc::new(Lines::default());
        let logger = Logger::with_shared_sink(Level::Warn, lines.clone());
        HostProfile::default().report(&logger);
        assert!(lines.0.lock().unwrap().is_empty());
    }
}

// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flash plugin version parsing.

/// Description used when the host reports no plugin.
pub const MISSING_PLUGIN_DESCRIPTION: &str = "0 r0";

/// Major version and build number of the Flash plugin.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PluginVersion {
    /// Major version.
    pub version: u32,
    /// Build number.
    pub build: u32,
}

impl PluginVersion {
    /// Parses a plugin description such as `"Shockwave Flash 10.1 r102"`.
    ///
    /// The description is split into runs of ASCII digits. The first run is
    /// the version and the third run is the build; either is `0` when it is
    /// missing or does not fit.
    ///
    /// ```
    /// use crosswalk_env::PluginVersion;
    ///
    /// let v = PluginVersion::parse("Shockwave Flash 10.1 r102");
    /// assert_eq!((v.version, v.build), (10, 102));
    ///
    /// // ActiveX reports a comma-separated version string instead.
    /// let v = PluginVersion::parse("WIN 9,0,124,0");
    /// assert_eq!((v.version, v.build), (9, 124));
    /// ```
    #[must_use]
    pub fn parse(description: &str) -> Self {
        let mut runs = description
            .split(|c: char| !c.is_ascii_digit())
            .filter(|run| !run.is_empty())
            .map(|run| run.parse::<u32>().unwrap_or(0));
        let version = runs.next().unwrap_or(0);
        let build = runs.nth(1).unwrap_or(0);
        Self { version, build }
    }

    /// Detects the plugin version from the host's reports.
    ///
    /// `plugin_description` is the `navigator.plugins` entry's description;
    /// `activex_version` is the ActiveX control's `$version` variable. The
    /// first one present is parsed. With neither, the result is `0 r0`.
    #[must_use]
    pub fn detect(plugin_description: Option<&str>, activex_version: Option<&str>) -> Self {
        Self::parse(
            plugin_description
                .or(activex_version)
                .unwrap_or(MISSING_PLUGIN_DESCRIPTION),
        )
    }

    /// Returns `true` if a plugin was reported.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.version != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_description_is_zero() {
        assert_eq!(PluginVersion::detect(None, None), PluginVersion::default());
        assert!(!PluginVersion::default().is_present());
        assert_eq!(
            PluginVersion::parse(MISSING_PLUGIN_DESCRIPTION),
            PluginVersion::default()
        );
    }

    #[test]
    fn second_run_is_skipped() {
        let v = PluginVersion::parse("11.2 r202");
        assert_eq!(v, PluginVersion { version: 11, build: 202 });
    }

    #[test]
    fn short_descriptions_default_missing_parts() {
        assert_eq!(
            PluginVersion::parse("Shockwave Flash 9"),
            PluginVersion { version: 9, build: 0 }
        );
        assert_eq!(
            PluginVersion::parse("Shockwave Flash 9.0"),
            PluginVersion { version: 9, build: 0 }
        );
        assert_eq!(PluginVersion::parse("no digits here"), PluginVersion::default());
        assert_eq!(PluginVersion::parse(""), PluginVersion::default());
    }

    #[test]
    fn oversized_runs_become_zero() {
        let v = PluginVersion::parse("99999999999 r1 7");
        assert_eq!(v, PluginVersion { version: 0, build: 7 });
    }

    #[test]
    fn plugin_description_wins_over_activex() {
        let v = PluginVersion::detect(Some("Shockwave Flash 10.0 r45"), Some("WIN 9,0,124,0"));
        assert_eq!(v, PluginVersion { version: 10, build: 45 });
        let v = PluginVersion::detect(None, Some("WIN 9,0,124,0"));
        assert_eq!(v, PluginVersion { version: 9, build: 124 });
        assert!(v.is_present());
    }
}

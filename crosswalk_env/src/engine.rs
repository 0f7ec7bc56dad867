// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering-engine version estimates.
//!
//! Each engine is identified by a signature global and versioned by probing
//! for APIs that appeared in known releases. The numbers are coarse build
//! markers, not exact release versions.

use crate::surface::{Features, HostSurface};

/// Estimated engine versions; `None` when the engine is not detected.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct EngineVersions {
    /// Opera's Presto.
    pub presto: Option<u32>,
    /// Internet Explorer's Trident.
    pub trident: Option<u32>,
    /// WebKit.
    pub webkit: Option<u32>,
    /// Mozilla's Gecko.
    pub gecko: Option<u32>,
}

impl EngineVersions {
    /// Runs every engine probe against `surface`.
    ///
    /// ```
    /// use crosswalk_env::{EngineVersions, HostSurface};
    ///
    /// let surface = HostSurface::ACTIVE_X_OBJECT | HostSurface::XML_HTTP_REQUEST;
    /// let engines = EngineVersions::detect(surface);
    /// assert_eq!(engines.trident, Some(5));
    /// assert_eq!(engines.presto, None);
    /// ```
    #[must_use]
    pub fn detect(surface: HostSurface) -> Self {
        Self {
            presto: presto(surface),
            trident: trident(surface),
            webkit: webkit(surface),
            gecko: gecko(surface),
        }
    }

    /// Returns `true` if no engine was detected.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        *self == Self::default()
    }
}

fn presto(surface: HostSurface) -> Option<u32> {
    if !surface.contains(HostSurface::OPERA) {
        None
    } else if surface.contains(HostSurface::CALLEE_CALLER) {
        Some(960)
    } else if surface.contains(HostSurface::GET_ELEMENTS_BY_CLASS_NAME) {
        Some(950)
    } else {
        Some(925)
    }
}

fn trident(surface: HostSurface) -> Option<u32> {
    if !surface.contains(HostSurface::ACTIVE_X_OBJECT) {
        None
    } else if !surface.contains(HostSurface::XML_HTTP_REQUEST) {
        Some(4)
    } else if surface.contains(HostSurface::QUERY_SELECTOR_ALL) {
        Some(6)
    } else {
        Some(5)
    }
}

fn webkit(surface: HostSurface) -> Option<u32> {
    let features = Features::detect(surface);
    if surface.contains(HostSurface::TAINT_ENABLED) {
        None
    } else if !features.xpath {
        Some(419)
    } else if features.query {
        Some(525)
    } else {
        Some(420)
    }
}

fn gecko(surface: HostSurface) -> Option<u32> {
    if !surface.intersects(HostSurface::GET_BOX_OBJECT_FOR | HostSurface::MOZ_INNER_SCREEN_X) {
        None
    } else if surface.contains(HostSurface::GET_ELEMENTS_BY_CLASS_NAME) {
        Some(19)
    } else {
        Some(18)
    }
}

// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host globals and the feature flags derived from them.

use bitflags::bitflags;

bitflags! {
    /// Which globals and methods the host environment exposes.
    ///
    /// The host fills this in once; everything else in the crate is derived
    /// from it.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct HostSurface: u32 {
        /// `window.opera` exists.
        const OPERA                      = 1 << 0;
        /// `arguments.callee.caller` is populated.
        const CALLEE_CALLER              = 1 << 1;
        /// `document.getElementsByClassName` exists.
        const GET_ELEMENTS_BY_CLASS_NAME = 1 << 2;
        /// `window.ActiveXObject` exists.
        const ACTIVE_X_OBJECT            = 1 << 3;
        /// `window.XMLHttpRequest` exists.
        const XML_HTTP_REQUEST           = 1 << 4;
        /// `document.querySelectorAll` exists.
        const QUERY_SELECTOR_ALL         = 1 << 5;
        /// `navigator.taintEnabled` exists.
        const TAINT_ENABLED              = 1 << 6;
        /// `document.evaluate` exists.
        const EVALUATE                   = 1 << 7;
        /// `window.runtime` exists.
        const RUNTIME                    = 1 << 8;
        /// `document.querySelector` exists.
        const QUERY_SELECTOR             = 1 << 9;
        /// `document.getBoxObjectFor` exists.
        const GET_BOX_OBJECT_FOR         = 1 << 10;
        /// `window.mozInnerScreenX` is set.
        const MOZ_INNER_SCREEN_X         = 1 << 11;
    }
}

/// Coarse capability flags.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Features {
    /// XPath evaluation is available.
    pub xpath: bool,
    /// Running inside an AIR runtime.
    pub air: bool,
    /// Selector queries are available.
    pub query: bool,
}

impl Features {
    /// Derives the feature flags from a host surface.
    ///
    /// ```
    /// use crosswalk_env::{Features, HostSurface};
    ///
    /// let features = Features::detect(HostSurface::EVALUATE | HostSurface::QUERY_SELECTOR);
    /// assert!(features.xpath && features.query && !features.air);
    /// ```
    #[must_use]
    pub fn detect(surface: HostSurface) -> Self {
        Self {
            xpath: surface.contains(HostSurface::EVALUATE),
            air: surface.contains(HostSurface::RUNTIME),
            query: surface.contains(HostSurface::QUERY_SELECTOR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_surface_has_no_features() {
        assert_eq!(Features::detect(HostSurface::empty()), Features::default());
    }

    #[test]
    fn flags_map_one_to_one() {
        let air = Features::detect(HostSurface::RUNTIME);
        assert_eq!(
            air,
            Features {
                xpath: false,
                air: true,
                query: false,
            }
        );
        // Unrelated globals do not leak into the feature set.
        let noisy = Features::detect(HostSurface::OPERA | HostSurface::QUERY_SELECTOR_ALL);
        assert_eq!(noisy, Features::default());
    }
}

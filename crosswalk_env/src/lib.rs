// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crosswalk Env: static facts about the host environment.
//!
//! The host describes which globals it exposes once, as a [`HostSurface`].
//! Everything else is derived from that and never re-probed:
//!
//! - [`Features`]: XPath, AIR runtime and selector-query availability.
//! - [`EngineVersions`]: coarse Presto, Trident, WebKit and Gecko versions.
//! - [`PluginVersion`]: the Flash plugin's version and build.
//! - [`HostProfile`]: all of the above, bundled.
//!
//! [`lookup_element`] resolves element ids through whichever lookup API an
//! [`ElementDirectory`] exposes.
//!
//! ## Example
//!
//! ```rust
//! use crosswalk_env::{HostProfile, HostSurface, PluginVersion};
//!
//! let surface = HostSurface::ACTIVE_X_OBJECT
//!     | HostSurface::XML_HTTP_REQUEST
//!     | HostSurface::QUERY_SELECTOR_ALL
//!     | HostSurface::TAINT_ENABLED;
//! let plugin = PluginVersion::detect(None, Some("WIN 10,0,22,87"));
//!
//! let profile = HostProfile::detect(surface, plugin);
//! assert_eq!(profile.engines.trident, Some(6));
//! assert_eq!(profile.engines.webkit, None);
//! assert_eq!(profile.plugin.version, 10);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod engine;
mod lookup;
mod plugin;
mod profile;
mod surface;

pub use engine::EngineVersions;
pub use lookup::{ElementDirectory, ElementTable, LookupCaps, lookup_element};
pub use plugin::{MISSING_PLUGIN_DESCRIPTION, PluginVersion};
pub use profile::HostProfile;
pub use surface::{Features, HostSurface};

// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `crosswalk_log` crate.
//!
//! These install a recording `log` backend and check which channels reach it
//! through `LogCrateSink`.

use std::sync::Mutex;

use crosswalk_log::{Level, LogCrateSink, Logger, Severity};

struct Capture {
    records: Mutex<Vec<(log::Level, String, String)>>,
}

impl log::Log for Capture {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        self.records.lock().unwrap().push((
            record.level(),
            record.target().to_string(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    records: Mutex::new(Vec::new()),
};

fn drain(target: &str) -> Vec<(log::Level, String)> {
    let mut records = CAPTURE.records.lock().unwrap();
    let (mine, rest): (Vec<_>, Vec<_>) = records.drain(..).partition(|(_, t, _)| t == target);
    *records = rest;
    mine.into_iter().map(|(level, _, msg)| (level, msg)).collect()
}

fn install() {
    // Every test installs the same backend; only the first call succeeds.
    let _ = log::set_logger(&CAPTURE);
    log::set_max_level(log::LevelFilter::Trace);
}

#[test]
fn warn_level_forwards_warnings_and_drops_debug() {
    install();
    let logger = Logger::from_name("warn", LogCrateSink::new("crosswalk::warn_test")).unwrap();
    logger.warn("legacy listener API in use");
    logger.debug("probing listener API");
    assert_eq!(
        drain("crosswalk::warn_test"),
        [(log::Level::Warn, String::from("legacy listener API in use"))]
    );
}

#[test]
fn severities_map_to_log_levels() {
    install();
    let logger = Logger::new(Level::Debug, LogCrateSink::new("crosswalk::levels_test"));
    for severity in Severity::ALL {
        logger.channel(severity).log(severity.name());
    }
    assert_eq!(
        drain("crosswalk::levels_test"),
        [
            (log::Level::Error, String::from("error")),
            (log::Level::Warn, String::from("warn")),
            (log::Level::Info, String::from("info")),
            (log::Level::Debug, String::from("debug")),
        ]
    );
}

#[test]
fn captured_channel_outlives_reconfiguration() {
    install();
    let logger = Logger::new(Level::Info, LogCrateSink::new("crosswalk::reconfigure_test"));
    let info = logger.channel(Severity::Info).clone();
    let quiet = logger.reconfigure(Level::None);

    quiet.info("dropped");
    quiet.error("dropped too");
    info.log("kept");
    assert_eq!(
        drain("crosswalk::reconfigure_test"),
        [(log::Level::Info, String::from("kept"))]
    );
}

#[test]
fn unknown_level_is_reported_by_name() {
    let err = "verbose".parse::<Level>().unwrap_err();
    assert_eq!(err.to_string(), "invalid logging type 'verbose'");
    assert!(Logger::from_name("", LogCrateSink::default()).is_err());
}

// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `crosswalk_config` crate.
//!
//! These exercise declaration through `ConfigObject`: coercion on every
//! write, defaults versus seeded values, custom accessor precedence and
//! kind conflicts.

use std::sync::Arc;

use crosswalk_config::{
    BackingStore, ConfigError, ConfigObject, PropertyKind, PropertyDescriptor, Value,
};

#[test]
fn volume_round_trip() {
    let mut config = ConfigObject::new();
    let volume = config
        .property::<i64>("volume", 50_i64, "Playback volume")
        .unwrap();
    assert_eq!(config.get(&volume), Ok(50));

    config.set(&volume, "75").unwrap();
    assert_eq!(config.get(&volume), Ok(75));

    config.set(&volume, "loud").unwrap();
    assert!(config.get_value("volume").unwrap().is_nan());
    assert_eq!(
        config.get(&volume),
        Err(ConfigError::NotANumber {
            name: "volume".into()
        })
    );
}

#[test]
fn falsy_inputs_store_false() {
    let mut config = ConfigObject::new();
    let flag = config.property::<bool>("flag", true, "").unwrap();
    let falsy = [
        Value::Int(0),
        Value::from("0"),
        Value::from("no"),
        Value::from("false"),
        Value::from(""),
        Value::Null,
        Value::Undefined,
    ];
    for raw in falsy {
        config.set(&flag, raw.clone()).unwrap();
        assert_eq!(config.get_value("flag"), Ok(Value::Bool(false)), "{raw:?}");
    }

    let truthy = [Value::Int(1), Value::from("yes"), Value::from("true"), Value::Number(0.5)];
    for raw in truthy {
        config.set(&flag, raw.clone()).unwrap();
        assert_eq!(config.get_value("flag"), Ok(Value::Bool(true)), "{raw:?}");
    }
}

#[test]
fn integer_inputs_follow_prefix_parsing() {
    let mut config = ConfigObject::new();
    let port = config.property::<i64>("port", 0_i64, "").unwrap();
    for (raw, expected) in [("8080", 8080), ("  42px", 42), ("-7", -7), ("+3", 3)] {
        config.set(&port, raw).unwrap();
        assert_eq!(config.get(&port), Ok(expected), "{raw:?}");
    }
    for (raw, expected) in [(12.9, 12), (-3.7, -3), (5e-7, 5), (1e21, 1)] {
        config.set(&port, raw).unwrap();
        assert_eq!(config.get(&port), Ok(expected), "{raw:?}");
    }
    config.set(&port, "px42").unwrap();
    assert!(config.get_value("port").unwrap().is_nan());
}

#[test]
fn redeclaration_recoerces_existing_value() {
    let store: BackingStore = [("retries", "3 times")].into_iter().collect();
    let mut config = ConfigObject::with_store(store);
    config.property::<i64>("retries", 5_i64, "").unwrap();
    assert_eq!(config.store().get("retries"), Some(&Value::Int(3)));

    let retries = config.property::<i64>("retries", 9_i64, "").unwrap();
    assert_eq!(config.get(&retries), Ok(3));
}

#[test]
fn installed_getter_survives_declaration() {
    let mut config = ConfigObject::new();
    let existing = config.define_getter("mode", |_| Value::from("fixed"));

    let descriptor = PropertyDescriptor::builder("mode", PropertyKind::String)
        .default_value("auto")
        .description("Render mode")
        .build();
    config.declare(descriptor).unwrap();

    assert!(Arc::ptr_eq(config.table().getter("mode").unwrap(), &existing));
    assert_eq!(config.get_value("mode"), Ok(Value::from("fixed")));
    assert_eq!(config.description("mode"), Some("Render mode"));
    assert_eq!(
        config.table().doc_slot("mode_description"),
        Some("Render mode")
    );
}

#[test]
fn installed_getter_beats_descriptor_getter() {
    let mut config = ConfigObject::new();
    let existing = config.define_getter("mode", |_| Value::from("fixed"));

    let descriptor = PropertyDescriptor::builder("mode", PropertyKind::String)
        .default_value("auto")
        .getter(|_| Value::from("from descriptor"))
        .build();
    config.declare(descriptor).unwrap();

    assert!(Arc::ptr_eq(config.table().getter("mode").unwrap(), &existing));
    assert_eq!(config.get_value("mode"), Ok(Value::from("fixed")));
}

#[test]
fn redeclaring_with_another_kind_fails() {
    let mut config = ConfigObject::new();
    let count = config.property::<i64>("x", 4_i64, "").unwrap();
    assert_eq!(
        config.property::<bool>("x", true, "").unwrap_err(),
        ConfigError::KindConflict {
            name: "x".into(),
            declared: PropertyKind::Integer,
            requested: PropertyKind::Boolean,
        }
    );
    config.set(&count, "12").unwrap();
    assert_eq!(config.get(&count), Ok(12));
}

#[test]
fn undeclared_and_empty_names_fail() {
    let mut config = ConfigObject::new();
    assert_eq!(
        config.get_value("missing"),
        Err(ConfigError::Undeclared {
            name: "missing".into()
        })
    );
    assert_eq!(
        config.set_value("missing", 1_i64),
        Err(ConfigError::Undeclared {
            name: "missing".into()
        })
    );
    assert_eq!(
        config.property::<bool>("", false, "").unwrap_err(),
        ConfigError::EmptyName
    );
}

// Copyright 2025 the Crosswalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `crosswalk_pointer` crate.
//!
//! A small document model drives listener registration, position mapping and
//! suppression together, the way a viewport host wires them up.

use std::cell::RefCell;
use std::collections::HashMap;

use kurbo::{Point, Vec2};

use crosswalk_log::{Level, Logger, NullSink};
use crosswalk_pointer::adapter::ViewportEventAdapter;
use crosswalk_pointer::event::DomEvent;
use crosswalk_pointer::listener::{
    EventTarget, ListenerBinding, ListenerCaps, Mechanism, Operation, RegistrationError, attach,
};
use crosswalk_pointer::origin::{OffsetInfo, OffsetLookup, element_origin};
use crosswalk_pointer::position::DocumentScroll;
use crosswalk_pointer::suppress::SuppressPath;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct NodeId(u32);

/// Elements with an offset and an optional positioning ancestor.
#[derive(Default)]
struct Document {
    nodes: HashMap<NodeId, (Vec2, Option<NodeId>)>,
}

impl Document {
    fn add(&mut self, id: u32, offset: (f64, f64), parent: Option<u32>) {
        self.nodes
            .insert(NodeId(id), (Vec2::new(offset.0, offset.1), parent.map(NodeId)));
    }
}

impl OffsetLookup<NodeId> for Document {
    fn offset_info(&self, element: NodeId) -> OffsetInfo<NodeId> {
        let (offset, parent) = self.nodes.get(&element).copied().unwrap_or_default();
        OffsetInfo::new(offset, parent)
    }
}

/// A canvas element that records its listeners by handler id.
struct Canvas {
    caps: ListenerCaps,
    listeners: RefCell<Vec<(String, u32)>>,
}

impl Canvas {
    fn new(caps: ListenerCaps) -> Self {
        Self {
            caps,
            listeners: RefCell::new(Vec::new()),
        }
    }

    fn types(&self) -> Vec<String> {
        self.listeners.borrow().iter().map(|(t, _)| t.clone()).collect()
    }
}

impl EventTarget<u32> for Canvas {
    fn listener_caps(&self) -> ListenerCaps {
        self.caps
    }

    fn attach_event(&mut self, on_type: &str, handler: u32) -> bool {
        self.listeners.borrow_mut().push((on_type.into(), handler));
        true
    }

    fn detach_event(&mut self, on_type: &str, handler: &u32) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(t, h)| !(t == on_type && h == handler));
        listeners.len() != before
    }

    fn add_event_listener(&mut self, event_type: &str, handler: u32, _: bool) {
        self.listeners.borrow_mut().push((event_type.into(), handler));
    }

    fn remove_event_listener(&mut self, event_type: &str, handler: &u32, _: bool) {
        self.listeners
            .borrow_mut()
            .retain(|(t, h)| !(t == event_type && h == handler));
    }
}

fn document() -> Document {
    let mut doc = Document::default();
    doc.add(1, (0.0, 0.0), None);
    doc.add(2, (8.0, 8.0), Some(1));
    doc.add(3, (100.0, 50.0), Some(2));
    doc
}

#[test]
fn origin_of_nested_canvas() {
    let doc = document();
    assert_eq!(element_origin(NodeId(3), &doc), Point::new(108.0, 58.0));
    assert_eq!(element_origin(NodeId(1), &doc), Point::ORIGIN);
    // Unknown elements have no positioning ancestor.
    assert_eq!(element_origin(NodeId(42), &doc), Point::ORIGIN);
}

#[test]
fn viewport_maps_legacy_and_standard_events_alike() {
    let scroll = DocumentScroll::new(Vec2::new(0.0, 30.0), Vec2::new(0.0, 12.0));
    let adapter =
        ViewportEventAdapter::new(document(), scroll, Logger::new(Level::None, NullSink))
            .with_scale(2.0);

    let standard = DomEvent::standard().with_page(Point::new(128.0, 98.0));
    let legacy = DomEvent::legacy().with_client(Point::new(128.0, 56.0));
    assert_eq!(adapter.event_position(&standard, NodeId(3)), Point::new(10.0, 20.0));
    assert_eq!(adapter.event_position(&legacy, NodeId(3)), Point::new(10.0, 20.0));
}

#[test]
fn binding_registers_and_removes_mouse_handlers() {
    let mut canvas = Canvas::new(ListenerCaps::LEGACY | ListenerCaps::STANDARD);
    let binding =
        ListenerBinding::probe::<u32, _>(&canvas, Logger::new(Level::None, NullSink)).unwrap();
    assert_eq!(binding.mechanism(), Mechanism::Legacy);

    for (i, event_type) in ["mousedown", "mouseup", "mousemove"].into_iter().enumerate() {
        let id = u32::try_from(i).unwrap();
        assert_eq!(binding.attach(&mut canvas, event_type, id), Ok(true));
    }
    assert_eq!(canvas.types(), ["onmousedown", "onmouseup", "onmousemove"]);

    assert_eq!(binding.detach(&mut canvas, "mouseup", &1_u32), Ok(true));
    assert_eq!(binding.detach(&mut canvas, "mouseup", &1_u32), Ok(false));
    assert_eq!(canvas.types(), ["onmousedown", "onmousemove"]);
}

#[test]
fn targets_without_listener_api_are_rejected() {
    let mut inert = Canvas::new(ListenerCaps::empty());
    assert_eq!(
        attach(&mut inert, "click", 0_u32),
        Err(RegistrationError::NoMechanism {
            operation: Operation::Attach
        })
    );
    let err = ListenerBinding::probe::<u32, _>(&inert, Logger::new(Level::None, NullSink))
        .unwrap_err();
    assert!(err.to_string().contains("could not be attached"));
}

#[test]
fn handlers_suppress_legacy_events() {
    let adapter = ViewportEventAdapter::new(
        document(),
        DocumentScroll::default(),
        Logger::new(Level::None, NullSink),
    );
    let mut event = DomEvent::legacy().with_client(Point::new(1.0, 1.0));
    let report = adapter.suppress(&mut event);
    assert_eq!(report.propagation, SuppressPath::LegacyFlag);
    assert_eq!(report.default_action, SuppressPath::LegacyFlag);
    assert!(event.cancel_bubble());
    assert!(!event.return_value());
}

//! Tests for the engine event sink

use lockrun::core::{build_event, EventSink, InMemoryEventSink};

#[test]
fn test_in_memory_event_sink() {
    let mut sink = InMemoryEventSink::new(10);

    let event = build_event(Some(1), "Delete repo foo", "admit");
    sink.record(event);

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].task_id, Some(1));
    assert_eq!(events[0].name, "Delete repo foo");
    assert_eq!(events[0].action, "admit");
}

#[test]
fn test_event_sink_overflow() {
    let mut sink = InMemoryEventSink::new(2);

    sink.record(build_event(Some(1), "task 1", "admit"));
    sink.record(build_event(Some(2), "task 2", "admit"));
    sink.record(build_event(Some(3), "task 3", "admit"));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].task_id, Some(2)); // First one popped
    assert_eq!(events[1].task_id, Some(3));
}

#[test]
fn test_build_event() {
    let event = build_event(None, "rejected submission", "conflict");

    assert_eq!(event.task_id, None);
    assert_eq!(event.name, "rejected submission");
    assert_eq!(event.action, "conflict");
    assert!(!event.event_id.is_empty());
    assert!(event.created_at_ms > 0);
}

#[test]
fn test_event_ids_unique() {
    let a = build_event(Some(1), "task", "admit");
    let b = build_event(Some(1), "task", "admit");
    assert_ne!(a.event_id, b.event_id);
}

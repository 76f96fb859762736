//! Tests for engine builders

use std::future::Future;

use lockrun::builders::{build_engine, build_engine_with_events};
use lockrun::config::EngineConfig;
use lockrun::core::{EngineError, InMemoryEventSink, Spawn};

// Builder tests never execute work, so spawned futures can be dropped.
#[derive(Clone)]
struct NoopSpawner;

impl Spawn for NoopSpawner {
    fn spawn<F>(&self, _fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
    }
}

#[test]
fn test_build_engine_from_valid_config() {
    let cfg = EngineConfig::default();
    let engine = build_engine(&cfg, NoopSpawner).unwrap();
    assert_eq!(engine.config().max_finished_tasks, None);
    assert!(engine.list().is_empty());
}

#[test]
fn test_build_engine_rejects_invalid_config() {
    let cfg = EngineConfig {
        max_finished_tasks: Some(0),
        event_capacity: 1024,
    };
    let err = build_engine(&cfg, NoopSpawner).unwrap_err();
    assert!(matches!(err, EngineError::Config(_)));
}

#[test]
fn test_build_engine_with_custom_sink() {
    let cfg = EngineConfig::default();
    let sink = Box::new(InMemoryEventSink::new(8));
    let engine = build_engine_with_events(&cfg, NoopSpawner, sink).unwrap();
    assert!(engine.list().is_empty());
}

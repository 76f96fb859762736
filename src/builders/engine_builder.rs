//! Build task engines from validated configuration.

use crate::config::EngineConfig;
use crate::core::{EngineError, EventSink, InMemoryEventSink, TaskEngine};

/// Build an engine from configuration with a bounded in-memory event sink
/// attached.
///
/// # Errors
///
/// Returns [`EngineError::Config`] if the configuration fails validation.
pub fn build_engine<S>(cfg: &EngineConfig, spawner: S) -> Result<TaskEngine<S>, EngineError> {
    validate(cfg)?;
    let sink = InMemoryEventSink::new(cfg.event_capacity);
    Ok(TaskEngine::with_config(cfg.clone(), spawner).with_events(Box::new(sink)))
}

/// Build an engine from configuration with a caller-provided event sink.
///
/// # Errors
///
/// Returns [`EngineError::Config`] if the configuration fails validation.
pub fn build_engine_with_events<S>(
    cfg: &EngineConfig,
    spawner: S,
    sink: Box<dyn EventSink>,
) -> Result<TaskEngine<S>, EngineError> {
    validate(cfg)?;
    Ok(TaskEngine::with_config(cfg.clone(), spawner).with_events(sink))
}

fn validate(cfg: &EngineConfig) -> Result<(), EngineError> {
    cfg.validate().map_err(EngineError::Config)
}

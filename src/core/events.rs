//! Engine event sink implementations.
//!
//! Records admissions, rejections, and terminations for observability; the
//! in-memory sink is a bounded ring buffer suitable for status endpoints and
//! tests.

use std::collections::VecDeque;

use uuid::Uuid;

use crate::core::task::TaskId;
use crate::util::clock::now_ms;

/// Engine lifecycle event.
#[derive(Debug, Clone)]
pub struct EngineEvent {
    /// Event identifier.
    pub event_id: String,
    /// Related task identifier; absent for rejected submissions, which never
    /// produce a task.
    pub task_id: Option<TaskId>,
    /// Submission/task name.
    pub name: String,
    /// Action taken (admit, conflict, succeeded, failed).
    pub action: String,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
}

/// Event sink abstraction.
pub trait EventSink: Send {
    /// Record an engine event.
    fn record(&mut self, event: EngineEvent);
}

/// In-memory event sink for testing and dev.
pub struct InMemoryEventSink {
    events: VecDeque<EngineEvent>,
    max_events: usize,
}

impl InMemoryEventSink {
    /// Create a new in-memory sink with a bounded buffer.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    #[must_use]
    pub fn events(&self) -> Vec<EngineEvent> {
        self.events.iter().cloned().collect()
    }
}

impl EventSink for InMemoryEventSink {
    fn record(&mut self, event: EngineEvent) {
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// Helper to build an engine event from context.
pub fn build_event(
    task_id: Option<TaskId>,
    name: impl Into<String>,
    action: impl Into<String>,
) -> EngineEvent {
    EngineEvent {
        event_id: Uuid::new_v4().to_string(),
        task_id,
        name: name.into(),
        action: action.into(),
        created_at_ms: now_ms(),
    }
}

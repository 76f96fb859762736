//! API-facing request/response models.
//!
//! The engine owns no wire protocol; these are the serializable shapes an
//! HTTP layer binds to. A conflict from [`submit_task`] maps directly to a
//! "request conflict" response, an admitted submission to an "accepted"
//! response carrying the snapshot.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, Spawn, Task, TaskEngine, TaskId, TaskState, TaskWork};

/// Task submission payload: a name and the set of resource keys the work
/// will touch. Duplicate keys collapse; order is irrelevant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSubmission {
    /// Human-readable task name.
    pub name: String,
    /// Resource keys guarding the work.
    pub resource_keys: Vec<String>,
}

/// Serializable view of a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSnapshot {
    /// Task identifier.
    pub id: TaskId,
    /// Task name.
    pub name: String,
    /// Current lifecycle state.
    pub state: TaskState,
}

impl From<&Task> for TaskSnapshot {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            name: task.name().to_string(),
            state: task.state(),
        }
    }
}

/// Health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    /// Healthy flag.
    pub ok: bool,
}

/// Submit a task described by a wire-level submission.
///
/// # Errors
///
/// Returns [`EngineError::Conflict`] when any requested key is busy; no task
/// is created in that case.
pub fn submit_task<S, W>(
    engine: &TaskEngine<S>,
    req: TaskSubmission,
    work: W,
) -> Result<TaskSnapshot, EngineError>
where
    S: Spawn,
    W: TaskWork,
{
    let task = engine.submit(req.name, req.resource_keys, work)?;
    Ok(TaskSnapshot::from(&task))
}

/// Snapshot of a single task, if it exists.
pub fn get_task<S>(engine: &TaskEngine<S>, id: TaskId) -> Option<TaskSnapshot> {
    engine.get(id).map(|task| TaskSnapshot::from(&task))
}

/// Snapshots of all known tasks in creation order.
pub fn list_tasks<S>(engine: &TaskEngine<S>) -> Vec<TaskSnapshot> {
    engine.list().iter().map(TaskSnapshot::from).collect()
}

/// Captured output text of a task, if it exists.
pub fn task_output<S>(engine: &TaskEngine<S>, id: TaskId) -> Option<String> {
    engine.get(id).map(|task| task.output().snapshot())
}

/// Detail record of a task, if it exists.
pub fn task_detail<S>(engine: &TaskEngine<S>, id: TaskId) -> Option<serde_json::Value> {
    engine.get(id).map(|task| task.detail().load())
}

/// Return a health payload.
#[must_use]
pub const fn health() -> Health {
    Health { ok: true }
}

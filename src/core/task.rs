//! Task records and the task state machine.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::core::detail::TaskDetail;
use crate::core::output::TaskOutput;

/// Process-unique task identifier, assigned monotonically at creation.
pub type TaskId = u64;

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskState {
    /// Task is allocated but not yet started. Not reached in the
    /// submit-immediately-runs model; kept for wire compatibility.
    Idle,
    /// Task is currently running.
    Running,
    /// Task finished successfully.
    Succeeded,
    /// Task finished with an error or an unrecoverable fault.
    Failed,
}

impl TaskState {
    /// Check if this is a terminal state (cannot transition further).
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }

    /// Check if the task is currently running.
    #[must_use]
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }

    /// Display name for the state.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Running => "RUNNING",
            Self::Succeeded => "SUCCEEDED",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Handle to one admitted submission: identity, name, lifecycle state,
/// captured output, and progress detail.
///
/// Handles are cheap to clone; all clones observe the same task. The engine
/// mutates the state on behalf of the executing work; observers may read
/// state, output, and detail at any time from any thread.
#[derive(Clone, Debug)]
pub struct Task {
    inner: Arc<TaskInner>,
}

#[derive(Debug)]
struct TaskInner {
    id: TaskId,
    name: String,
    state: RwLock<TaskState>,
    output: TaskOutput,
    detail: TaskDetail,
}

impl Task {
    /// Create a task record in the RUNNING state with fresh output and
    /// detail. Only the engine creates tasks, at the moment a submission is
    /// admitted.
    pub(crate) fn new(id: TaskId, name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(TaskInner {
                id,
                name: name.into(),
                state: RwLock::new(TaskState::Running),
                output: TaskOutput::new(),
                detail: TaskDetail::new(),
            }),
        }
    }

    /// The task identifier.
    #[must_use]
    pub fn id(&self) -> TaskId {
        self.inner.id
    }

    /// The human-readable task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The current lifecycle state.
    #[must_use]
    pub fn state(&self) -> TaskState {
        *self.inner.state.read()
    }

    /// A handle to the task's output sink.
    #[must_use]
    pub fn output(&self) -> TaskOutput {
        self.inner.output.clone()
    }

    /// A handle to the task's detail record.
    #[must_use]
    pub fn detail(&self) -> TaskDetail {
        self.inner.detail.clone()
    }

    /// Transition to a new state. Terminal states are final.
    pub(crate) fn set_state(&self, state: TaskState) {
        let mut current = self.inner.state.write();
        if !current.is_terminal() {
            *current = state;
        }
    }
}

//! Core engine abstractions: tasks, output capture, resource locking, and
//! admission control.

pub mod detail;
pub mod engine;
pub mod error;
pub mod events;
pub mod lock_table;
pub mod output;
pub mod task;
pub mod work;

pub use detail::TaskDetail;
pub use engine::{EngineStats, Spawn, TaskEngine};
pub use error::{AppResult, EngineError};
pub use events::{build_event, EngineEvent, EventSink, InMemoryEventSink};
pub use lock_table::ResourceLockTable;
pub use output::TaskOutput;
pub use task::{Task, TaskId, TaskState};
pub use work::TaskWork;

//! Runtime adapters and API-facing models.

pub mod api;
#[cfg(feature = "tokio-runtime")]
pub mod tokio_spawner;

pub use api::{
    get_task, health, list_tasks, submit_task, task_detail, task_output, Health, TaskSnapshot,
    TaskSubmission,
};
#[cfg(feature = "tokio-runtime")]
pub use tokio_spawner::TokioSpawner;

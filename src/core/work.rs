//! Work-function abstraction executed by the engine.

use std::future::Future;

use async_trait::async_trait;

use crate::core::detail::TaskDetail;
use crate::core::error::AppResult;
use crate::core::output::TaskOutput;

/// A unit of work executed asynchronously once its submission is admitted.
///
/// The engine hands the work clones of its task's output sink and detail
/// record for the whole execution; the returned result becomes the task's
/// terminal status (`Ok` = SUCCEEDED, `Err` = FAILED with the error appended
/// to the output).
///
/// Any `FnOnce(TaskOutput, TaskDetail) -> Future` closure is a `TaskWork`,
/// so call sites submit plain async closures:
///
/// ```rust,ignore
/// engine.submit("Add packages to repo foo", ["repo:foo"], |out, detail| async move {
///     out.print("Loading packages...");
///     detail.store(serde_json::json!({"loaded": 12}));
///     Ok(())
/// })?;
/// ```
#[async_trait]
pub trait TaskWork: Send + 'static {
    /// Execute the work, writing progress to `out` and `detail`.
    async fn run(self: Box<Self>, out: TaskOutput, detail: TaskDetail) -> AppResult<()>;
}

#[async_trait]
impl<F, Fut> TaskWork for F
where
    F: FnOnce(TaskOutput, TaskDetail) -> Fut + Send + 'static,
    Fut: Future<Output = AppResult<()>> + Send + 'static,
{
    async fn run(self: Box<Self>, out: TaskOutput, detail: TaskDetail) -> AppResult<()> {
        (*self)(out, detail).await
    }
}

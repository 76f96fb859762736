//! Task engine: admission control and asynchronous execution.

use std::any::Any;
use std::collections::{BTreeMap, BTreeSet};
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::FutureExt;
use parking_lot::{Mutex, RwLock};

use crate::config::EngineConfig;
use crate::core::error::EngineError;
use crate::core::events::{build_event, EventSink};
use crate::core::lock_table::ResourceLockTable;
use crate::core::task::{Task, TaskId, TaskState};
use crate::core::work::TaskWork;

/// Abstraction for spawning task execution on a runtime.
pub trait Spawn {
    /// Spawn an async task that runs to completion.
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static;
}

/// Point-in-time counters for status endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineStats {
    /// Tasks currently held in the directory.
    pub total_tasks: usize,
    /// Tasks in the RUNNING state.
    pub running: usize,
    /// Tasks that finished successfully.
    pub succeeded: usize,
    /// Tasks that finished with an error.
    pub failed: usize,
    /// Resource keys currently claimed by running tasks.
    pub claimed_keys: usize,
}

/// Background task engine.
///
/// Accepts submissions of (name, resource keys, work function), admits them
/// only when every requested key is free, and runs admitted work
/// asynchronously on the provided [`Spawn`] implementation. Admission is a
/// synchronous all-or-nothing check against the lock table: a conflicting
/// submission is rejected immediately, creates no task, and spawns nothing.
///
/// The engine is cheap to clone; clones share the lock table, the task
/// directory, and the id counter.
#[derive(Clone)]
pub struct TaskEngine<S> {
    config: EngineConfig,
    /// Single source of truth for mutual exclusion between submissions.
    locks: Arc<ResourceLockTable>,
    /// Task directory, ordered by id. Append-mostly; concurrent insert of
    /// new ids and read by id/list.
    tasks: Arc<RwLock<BTreeMap<TaskId, Task>>>,
    next_id: Arc<AtomicU64>,
    events: Option<Arc<Mutex<Box<dyn EventSink>>>>,
    spawner: S,
}

impl<S> std::fmt::Debug for TaskEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskEngine")
            .field("config", &self.config)
            .field("locks", &self.locks)
            .field("tasks", &self.tasks)
            .field("next_id", &self.next_id)
            .field("events", &self.events.as_ref().map(|_| "<sink>"))
            .finish_non_exhaustive()
    }
}

impl<S> TaskEngine<S> {
    /// Create an engine with the default configuration.
    pub fn new(spawner: S) -> Self {
        Self::with_config(EngineConfig::default(), spawner)
    }

    /// Create an engine from configuration.
    pub fn with_config(config: EngineConfig, spawner: S) -> Self {
        Self {
            config,
            locks: Arc::new(ResourceLockTable::new()),
            tasks: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicU64::new(0)),
            events: None,
            spawner,
        }
    }

    /// Attach an event sink.
    #[must_use]
    pub fn with_events(mut self, sink: Box<dyn EventSink>) -> Self {
        self.events = Some(Arc::new(Mutex::new(sink)));
        self
    }

    /// The engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Lookup a task by identifier.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<Task> {
        self.tasks.read().get(&id).cloned()
    }

    /// All known tasks in creation order. A live snapshot; callers may poll
    /// repeatedly.
    #[must_use]
    pub fn list(&self) -> Vec<Task> {
        self.tasks.read().values().cloned().collect()
    }

    /// Point-in-time engine counters.
    #[must_use]
    pub fn stats(&self) -> EngineStats {
        let tasks = self.tasks.read();
        let mut running = 0;
        let mut succeeded = 0;
        let mut failed = 0;
        for task in tasks.values() {
            match task.state() {
                TaskState::Running => running += 1,
                TaskState::Succeeded => succeeded += 1,
                TaskState::Failed => failed += 1,
                TaskState::Idle => {}
            }
        }
        EngineStats {
            total_tasks: tasks.len(),
            running,
            succeeded,
            failed,
            claimed_keys: self.locks.claimed_count(),
        }
    }

    fn record(&self, task_id: Option<TaskId>, name: &str, action: &str) {
        if let Some(sink) = &self.events {
            sink.lock().record(build_event(task_id, name, action));
        }
    }
}

impl<S: Spawn> TaskEngine<S> {
    /// Submit a unit of work guarded by `resource_keys`.
    ///
    /// On admission the task handle is returned synchronously, already
    /// RUNNING, while the work executes asynchronously; the caller polls the
    /// handle for completion. Duplicate keys collapse; order is irrelevant.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Conflict`] if any requested key is held by a
    /// running task. No task is created and nothing is spawned in that case.
    pub fn submit<W, I, K>(
        &self,
        name: impl Into<String>,
        resource_keys: I,
        work: W,
    ) -> Result<Task, EngineError>
    where
        W: TaskWork,
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let name = name.into();
        let keys: BTreeSet<String> = resource_keys.into_iter().map(Into::into).collect();

        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;

        if let Err(err) = self.locks.try_claim(&keys, id) {
            tracing::warn!("submission `{}` rejected: {}", name, err);
            self.record(None, &name, "conflict");
            return Err(err);
        }

        let task = Task::new(id, name.clone());
        {
            let mut tasks = self.tasks.write();
            tasks.insert(id, task.clone());
        }
        self.record(Some(id), &name, "admit");
        tracing::info!("task {} `{}` started", id, name);

        let locks = Arc::clone(&self.locks);
        let tasks = Arc::clone(&self.tasks);
        let events = self.events.clone();
        let max_finished = self.config.max_finished_tasks;
        let handle = task.clone();
        let work: Box<dyn TaskWork> = Box::new(work);

        self.spawner.spawn(async move {
            tracing::debug!("executing task {}", id);

            let result = AssertUnwindSafe(work.run(handle.output(), handle.detail()))
                .catch_unwind()
                .await;

            let outcome = match result {
                Ok(Ok(())) => TaskState::Succeeded,
                Ok(Err(err)) => {
                    handle.output().print(&format!("{err:#}"));
                    TaskState::Failed
                }
                Err(panic) => {
                    handle
                        .output()
                        .print(&format!("task aborted: {}", panic_message(&panic)));
                    TaskState::Failed
                }
            };

            // Keys must be free by the time the terminal state is
            // observable: a poller that sees SUCCEEDED/FAILED may re-claim
            // them immediately.
            locks.release(&keys);
            handle.set_state(outcome);

            let action = if outcome == TaskState::Succeeded {
                "succeeded"
            } else {
                "failed"
            };
            if let Some(sink) = &events {
                sink.lock().record(build_event(Some(id), handle.name(), action));
            }
            tracing::info!("task {} finished: {}", id, action);

            if let Some(cap) = max_finished {
                prune_finished(&tasks, cap);
            }
        });

        Ok(task)
    }
}

/// Drop the oldest terminal tasks beyond `cap`. Running tasks are never
/// pruned.
fn prune_finished(tasks: &RwLock<BTreeMap<TaskId, Task>>, cap: usize) {
    let mut tasks = tasks.write();
    let finished: Vec<TaskId> = tasks
        .iter()
        .filter(|(_, task)| task.state().is_terminal())
        .map(|(id, _)| *id)
        .collect();

    if finished.len() > cap {
        let excess = finished.len() - cap;
        for id in &finished[..excess] {
            tasks.remove(id);
        }
        tracing::debug!("pruned {} finished tasks", excess);
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    panic
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

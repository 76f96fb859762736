//! # Lockrun
//!
//! A conflict-aware background task engine that serializes work touching
//! shared resources.
//!
//! Lockrun was built for servers (package repository managers, content
//! stores) where every mutating API call becomes a background job: the
//! caller names the domain objects the job will touch, the engine admits the
//! job only if none of those objects is already being mutated, and the
//! caller polls the returned task handle for state, captured output, and
//! progress detail.
//!
//! ## Core Problem Solved
//!
//! Mutating operations against shared named resources (a repository, a
//! snapshot, an upload directory) must never run concurrently with each
//! other, but unrelated operations should run in full parallel:
//!
//! - **Instant admission decisions**: a conflicting submission is rejected
//!   synchronously instead of queueing — the HTTP layer can map the
//!   rejection straight to a conflict response
//! - **All-or-nothing claims**: a job claims every resource key it needs in
//!   one critical section, so partial locks and lock-order deadlocks cannot
//!   occur
//! - **Observable execution**: each task owns a thread-safe output sink and
//!   a JSON detail record that any number of observers may read while the
//!   work runs
//! - **No leaked claims**: keys are released when the work finishes, even if
//!   it panics
//!
//! ## Submitting work
//!
//! ```rust,ignore
//! use lockrun::core::TaskEngine;
//! use lockrun::runtime::TokioSpawner;
//!
//! let engine = TaskEngine::new(TokioSpawner::new(tokio::runtime::Handle::current()));
//!
//! let task = engine.submit(
//!     "Delete repo foo",
//!     ["repo:foo"],
//!     |out, _detail| async move {
//!         out.print("dropping repo foo\n");
//!         // ... domain logic ...
//!         Ok(())
//!     },
//! )?;
//!
//! // The call returns immediately; poll the handle.
//! println!("task {} is {}", task.id(), task.state());
//! println!("{}", task.output().snapshot());
//! ```
//!
//! A submission whose keys overlap a running task fails with
//! [`core::EngineError::Conflict`] and creates no task.
//!
//! For complete examples, see:
//! - `tests/engine_test.rs` - Full integration tests
//! - `README.md` - Comprehensive documentation

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core engine: tasks, output capture, resource locking, admission control.
pub mod core;
/// Configuration models for the engine.
pub mod config;
/// Builders to construct an engine from configuration.
pub mod builders;
/// Runtime adapters and API-facing models.
pub mod runtime;
/// Shared utilities.
pub mod util;

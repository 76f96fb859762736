//! Resource lock table: tracks which resource keys are claimed by in-flight
//! tasks.

use std::collections::{BTreeSet, HashMap};

use parking_lot::Mutex;

use crate::core::error::EngineError;
use crate::core::task::TaskId;

/// Maps each currently claimed resource key to the task that owns it.
///
/// Claiming is all-or-nothing: every key in a submission is checked and, only
/// if all are free, inserted under a single critical section. Partial claims
/// are never observable, which keeps the admission decision a synchronous
/// check and rules out lock-order deadlock between multi-key submissions.
#[derive(Debug, Default)]
pub struct ResourceLockTable {
    claims: Mutex<HashMap<String, TaskId>>,
}

impl ResourceLockTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically claim every key in `keys` for `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Conflict`] naming the busy keys if any key is
    /// already claimed; the table is left unchanged in that case.
    pub fn try_claim(&self, keys: &BTreeSet<String>, owner: TaskId) -> Result<(), EngineError> {
        let mut claims = self.claims.lock();

        let busy: Vec<&String> = keys.iter().filter(|k| claims.contains_key(*k)).collect();
        if !busy.is_empty() {
            return Err(EngineError::conflict(busy));
        }

        for key in keys {
            claims.insert(key.clone(), owner);
        }
        Ok(())
    }

    /// Remove every key in `keys` unconditionally.
    ///
    /// Called exactly once per successful claim, when the owning task
    /// terminates.
    pub fn release(&self, keys: &BTreeSet<String>) {
        let mut claims = self.claims.lock();
        for key in keys {
            claims.remove(key);
        }
    }

    /// The task currently holding `key`, if any.
    #[must_use]
    pub fn owner_of(&self, key: &str) -> Option<TaskId> {
        self.claims.lock().get(key).copied()
    }

    /// Number of currently claimed keys.
    #[must_use]
    pub fn claimed_count(&self) -> usize {
        self.claims.lock().len()
    }
}

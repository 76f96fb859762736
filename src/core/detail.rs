//! Structured progress detail attached to a task.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;

/// Auxiliary structured record a work function may populate with arbitrary
/// progress data, readable by observers independently of the output sink.
///
/// Handles are cheap to clone and share one underlying value. Starts out as
/// JSON `null` until the work stores something.
#[derive(Clone, Debug, Default)]
pub struct TaskDetail {
    value: Arc<RwLock<Value>>,
}

impl TaskDetail {
    /// Create an empty detail record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored value.
    pub fn store(&self, value: Value) {
        *self.value.write() = value;
    }

    /// Serialize `value` and store it, replacing the previous record.
    ///
    /// # Errors
    ///
    /// Returns the serialization error if `value` cannot be represented as
    /// JSON.
    pub fn store_serialized<T: Serialize>(&self, value: &T) -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(value)?;
        self.store(value);
        Ok(())
    }

    /// A clone of the currently stored value.
    #[must_use]
    pub fn load(&self) -> Value {
        self.value.read().clone()
    }
}

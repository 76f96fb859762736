//! Engine configuration structures.

use serde::{Deserialize, Serialize};

/// Engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Retain at most this many finished tasks in the task directory; the
    /// oldest terminal tasks are pruned after each completion. `None` keeps
    /// the full history for the life of the process. Running tasks are never
    /// pruned.
    pub max_finished_tasks: Option<usize>,
    /// Capacity of the bounded in-memory event sink when one is built from
    /// this configuration.
    pub event_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_finished_tasks: None,
            event_capacity: 1024,
        }
    }
}

impl EngineConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_finished_tasks == Some(0) {
            return Err("max_finished_tasks must be greater than 0 when set".into());
        }
        if self.event_capacity == 0 {
            return Err("event_capacity must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse engine configuration from a JSON string and validate.
    ///
    /// # Errors
    ///
    /// Returns a description of the parse or validation failure.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

//! Error types for engine operations.

use thiserror::Error;

/// Errors produced by the task engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// One or more requested resource keys are held by a running task.
    #[error("resource conflict: {0}")]
    Conflict(String),
    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    /// Build a conflict error naming the busy keys.
    pub fn conflict<I, K>(busy: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let keys: Vec<String> = busy.into_iter().map(|k| k.as_ref().to_string()).collect();
        Self::Conflict(keys.join(", "))
    }
}

/// Application-facing result using anyhow for work-function bodies and
/// higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;

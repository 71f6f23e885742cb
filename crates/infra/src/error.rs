use thiserror::Error;

use innkeep_core::DomainError;

use crate::store::StoreError;

/// Failure surface of the engines: deterministic domain failures plus
/// unexpected persistence failures, kept apart so the API layer can map
/// them to distinct response categories (and never leak store detail).
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("store failure: {0}")]
    Store(#[from] StoreError),
}

impl EngineError {
    pub fn not_found() -> Self {
        Self::Domain(DomainError::NotFound)
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Domain(DomainError::conflict(msg))
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Domain(DomainError::validation(msg))
    }
}

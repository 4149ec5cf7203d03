//! Error types for storage and orchestration

use conduct_catalog::CatalogError;
use conduct_types::{ValidationError, WarningId, WarningStatus};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage layer errors
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoreError {
    /// No warning exists under the given id
    #[error("warning not found: {0}")]
    WarningNotFound(WarningId),

    /// A review outcome was already recorded; outcomes are write-once
    #[error("review outcome already recorded for {0}")]
    ReviewAlreadyRecorded(WarningId),

    /// The backend failed
    #[error("storage backend failure: {reason}")]
    Backend { reason: String },
}

/// Orchestration errors surfaced by [`DisciplineService`]
///
/// Validation failures, bad references and storage faults stay distinct so
/// the UI can attach field messages, show a "not found" state, or retry,
/// respectively.
///
/// [`DisciplineService`]: crate::service::DisciplineService
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum DisciplineError {
    /// The draft or entity failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The storage layer failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A catalog reference did not resolve
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The requested lifecycle transition is not allowed
    #[error("warning {id} cannot transition from {from:?} to {to:?}")]
    InvalidStatusTransition {
        id: WarningId,
        from: WarningStatus,
        to: WarningStatus,
    },
}

/// Result type for orchestration operations
pub type Result<T> = std::result::Result<T, DisciplineError>;

//! Error types for catalog operations

use conduct_types::CategoryId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Catalog lookup and construction errors
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum CatalogError {
    /// The referenced category does not exist
    ///
    /// Distinct from a validation failure so callers can tell a bad
    /// reference apart from bad form input.
    #[error("category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// Two categories were registered under the same id
    #[error("duplicate category id: {0}")]
    DuplicateCategory(CategoryId),
}

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

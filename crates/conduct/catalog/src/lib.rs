//! Conduct Catalog - misconduct category configuration
//!
//! The catalog is the read-only set of misconduct categories an organization
//! disciplines against, each with its own escalation path. It is an explicit
//! value handed to the engine and the assembler - never a module-level
//! constant - so tests and multi-tenant deployments construct their own.
//!
//! ## Key Components
//!
//! - [`Catalog`]: category lookup, escalation paths, level validity
//! - [`CatalogBuilder`]: validating construction
//! - [`standard_catalog`]: the seeded catalog a fresh organization starts with
//! - [`DEFAULT_ESCALATION_PATH`]: deterministic fallback when a category has
//!   no configured path
//!
//! ## Configuration gaps
//!
//! Asking for the escalation path of a category the catalog does not know is
//! a configuration gap, not an error: the catalog logs a warning and returns
//! [`DEFAULT_ESCALATION_PATH`]. Issuance must not be blockable by stale
//! catalog data.
//!
//! ## Example
//!
//! ```rust
//! use conduct_catalog::{Catalog, standard_catalog};
//! use conduct_types::{CategoryId, WarningLevel};
//!
//! let catalog = standard_catalog();
//! let path = catalog.escalation_path(&CategoryId::new("attendance"));
//! assert_eq!(path[0], WarningLevel::Counselling);
//! assert!(catalog.is_valid_level(&CategoryId::new("attendance"), WarningLevel::Verbal));
//! ```

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod catalog;
pub mod error;
pub mod standard;

// Re-exports
pub use catalog::{level_label, Catalog, CatalogBuilder, DEFAULT_ESCALATION_PATH};
pub use error::{CatalogError, Result};
pub use standard::standard_catalog;

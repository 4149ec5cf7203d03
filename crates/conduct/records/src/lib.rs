//! Conduct Records - assembly, storage seam and orchestration
//!
//! This crate turns validated form input into persistable [`Warning`]
//! entities and coordinates the decision core with the storage layer. The
//! decision core itself stays synchronous and pure; only the storage seam
//! is async.
//!
//! ## Key Components
//!
//! - [`WarningDraft`]: builder for issuance input with a validating
//!   [`WarningDraft::assemble`] step
//! - [`WarningStore`]: the narrow async contract the document store fulfils
//! - [`InMemoryWarningStore`]: reference implementation for tests and
//!   development
//! - [`DisciplineService`]: recommend / issue / deliver / review / overturn
//!   orchestration with audit logging
//!
//! ## Example
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use conduct_catalog::standard_catalog;
//! use conduct_records::{DisciplineService, InMemoryWarningStore, WarningDraft};
//! use conduct_types::{CategoryId, EmployeeId};
//!
//! # async fn example() -> Result<(), conduct_records::DisciplineError> {
//! let service = DisciplineService::new(InMemoryWarningStore::new(), standard_catalog());
//! let now = Utc::now();
//!
//! let card = service
//!     .recommend(&EmployeeId::new("emp-1"), &CategoryId::new("attendance"), now)
//!     .await?;
//!
//! let draft = WarningDraft::new(
//!     EmployeeId::new("emp-1"),
//!     CategoryId::new("attendance"),
//!     card.suggested_level(),
//!     "mgr-1",
//!     now,
//! )
//! .with_description("Third late arrival this month")
//! .with_recommendation(card.recommendation.snapshot());
//!
//! let warning = service.issue(draft, now).await?;
//! println!("issued {}", warning.id);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod assembler;
pub mod error;
pub mod service;
pub mod store;

// Re-exports
pub use assembler::WarningDraft;
pub use error::{DisciplineError, Result, StoreError};
pub use service::DisciplineService;
pub use store::{InMemoryWarningStore, WarningStore, WarningUpdate};

// The entity this crate assembles, for downstream convenience
pub use conduct_types::Warning;

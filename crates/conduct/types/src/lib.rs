//! Conduct Types - Shared entities for the progressive-discipline core
//!
//! Conduct is the decision layer of an HR warning-management product. This
//! crate holds the vocabulary every other layer speaks:
//!
//! - **Category**: a class of misconduct with its own escalation path
//! - **Warning**: the persisted disciplinary record
//! - **WarningLevel**: the shared ladder of progressive-discipline actions
//! - **ValidityPeriod**: how long a warning counts toward escalation
//!
//! ## Architectural Boundaries
//!
//! - **conduct-types** owns: entity shapes, lifecycle enums, validation errors
//! - **conduct-catalog** owns: per-organization category configuration
//! - **conduct-engine** owns: escalation, expiry and review-state decisions
//! - **conduct-records** owns: assembly, the storage seam, orchestration
//!
//! Persistence and clocks live outside the core: entities serialize across a
//! document-store boundary, and every time-sensitive computation receives
//! `now` as an explicit argument.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod category;
pub mod error;
pub mod ids;
pub mod level;
pub mod warning;

// Re-export main types
pub use category::{Category, Severity};
pub use error::{ValidationError, ValidationResult};
pub use ids::{CategoryId, EmployeeId, OrganizationId, WarningId};
pub use level::WarningLevel;
pub use warning::{
    RecommendationSnapshot, ReviewOutcome, ValidityPeriod, Warning, WarningStatus,
};

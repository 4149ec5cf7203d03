//! Conduct Engine - the progressive-discipline decision core
//!
//! Everything in this crate is synchronous, side-effect-free computation
//! over in-memory data. Warning history is handed in as a slice, the
//! category catalog is an injected value, and `now` is an explicit argument
//! to every time-sensitive function. Repeated calls with identical inputs
//! yield identical outputs, so an interactive UI can recompute on every
//! selection change without debouncing for correctness.
//!
//! ## Key Components
//!
//! - [`EscalationResolver`]: what level must the next warning carry?
//! - [`EscalationRecommendation`] / [`RecommendationCard`]: the advisory
//!   result and its audit wrapper
//! - [`validity`]: calendar-month expiry arithmetic
//! - [`review_follow_up`]: the review follow-up state machine
//! - [`ReviewPolicy`]: the tunable grace period for auto-satisfied reviews
//!
//! ## Example
//!
//! ```rust
//! use chrono::Utc;
//! use conduct_catalog::standard_catalog;
//! use conduct_engine::EscalationResolver;
//! use conduct_types::CategoryId;
//!
//! let resolver = EscalationResolver::new(standard_catalog());
//! let recommendation = resolver.resolve(&CategoryId::new("attendance"), &[], Utc::now());
//! assert!(!recommendation.is_escalation);
//! ```

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod recommendation;
pub mod resolver;
pub mod review;
pub mod validity;

// Re-exports
pub use recommendation::{EscalationRecommendation, RecommendationCard};
pub use resolver::EscalationResolver;
pub use review::{
    classify_reviews, review_follow_up, warning_follow_up, ReviewFollowUp, ReviewPolicy,
    DEFAULT_AUTO_SATISFY_GRACE_DAYS,
};
pub use validity::{add_calendar_months, days_until_expiry, expiry_date, is_active};

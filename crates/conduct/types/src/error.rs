//! Validation errors
//!
//! Validation failures are returned to the caller synchronously and carry
//! enough structure for field-level messages in the issuing UI. They are
//! ordinary values, never panics - discipline issuance must not be blockable
//! by a fault the user cannot see.

use crate::ids::CategoryId;
use crate::level::WarningLevel;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A rejected entity or draft, with the field that failed
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum ValidationError {
    /// A required field was missing or empty
    #[error("required field missing: {field}")]
    MissingField { field: String },

    /// Warnings cannot be issued with a future issue date
    #[error("issue date {issue_date} is in the future (now: {now})")]
    IssueDateInFuture {
        issue_date: DateTime<Utc>,
        now: DateTime<Utc>,
    },

    /// The write-up cannot precede the incident it documents
    #[error("incident date {incident_date} is after issue date {issue_date}")]
    IncidentAfterIssue {
        incident_date: DateTime<Utc>,
        issue_date: DateTime<Utc>,
    },

    /// A follow-up review must be scheduled after issuance
    #[error("review date {review_date} is not after issue date {issue_date}")]
    ReviewNotAfterIssue {
        review_date: NaiveDate,
        issue_date: DateTime<Utc>,
    },

    /// The chosen level is not part of the category's escalation path
    #[error("level {level} is not in the escalation path of category {category}")]
    LevelNotInPath {
        category: CategoryId,
        level: WarningLevel,
    },

    /// A category must define at least one escalation step
    #[error("escalation path for category {category} is empty")]
    EmptyEscalationPath { category: CategoryId },

    /// No level may repeat within one escalation path
    #[error("escalation path for category {category} repeats level {level}")]
    DuplicatePathLevel {
        category: CategoryId,
        level: WarningLevel,
    },
}

impl ValidationError {
    /// A missing-field error for the named form field
    pub fn missing_field(field: impl Into<String>) -> Self {
        ValidationError::MissingField {
            field: field.into(),
        }
    }

    /// The form field this error should be attached to
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingField { field } => field,
            ValidationError::IssueDateInFuture { .. } => "issue_date",
            ValidationError::IncidentAfterIssue { .. } => "incident_date",
            ValidationError::ReviewNotAfterIssue { .. } => "review_date",
            ValidationError::LevelNotInPath { .. } => "level",
            ValidationError::EmptyEscalationPath { .. }
            | ValidationError::DuplicatePathLevel { .. } => "escalation_path",
        }
    }
}

/// Result type for validating constructors
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_error_messages_name_the_field() {
        let err = ValidationError::missing_field("incident_description");
        assert_eq!(err.field(), "incident_description");
        assert!(err.to_string().contains("incident_description"));
    }

    #[test]
    fn test_date_ordering_error_display() {
        let issue = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap();
        let err = ValidationError::IssueDateInFuture {
            issue_date: issue,
            now,
        };
        assert_eq!(err.field(), "issue_date");
        assert!(err.to_string().contains("future"));
    }
}

//! Warning records
//!
//! A `Warning` is the persisted disciplinary record. It is created by the
//! assembler in `conduct-records`, transitions `Issued -> Delivered` on
//! confirmed delivery, naturally lapses once its expiry date passes, and is
//! never physically deleted - `Overturned` archives it.

use crate::ids::{CategoryId, EmployeeId, WarningId};
use crate::level::WarningLevel;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How long a warning counts toward escalation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum ValidityPeriod {
    ThreeMonths,
    SixMonths,
    TwelveMonths,
}

impl ValidityPeriod {
    /// Number of calendar months this period spans
    pub fn months(&self) -> u32 {
        match self {
            ValidityPeriod::ThreeMonths => 3,
            ValidityPeriod::SixMonths => 6,
            ValidityPeriod::TwelveMonths => 12,
        }
    }
}

impl From<ValidityPeriod> for u32 {
    fn from(period: ValidityPeriod) -> u32 {
        period.months()
    }
}

impl TryFrom<u32> for ValidityPeriod {
    type Error = String;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        match months {
            3 => Ok(ValidityPeriod::ThreeMonths),
            6 => Ok(ValidityPeriod::SixMonths),
            12 => Ok(ValidityPeriod::TwelveMonths),
            other => Err(format!(
                "invalid validity period: {} months (expected 3, 6 or 12)",
                other
            )),
        }
    }
}

impl fmt::Display for ValidityPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} months", self.months())
    }
}

/// Warning lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningStatus {
    /// Issued but delivery not yet confirmed
    Issued,

    /// Delivery to the employee confirmed
    Delivered,

    /// Validity period elapsed (may also be computed on read)
    Expired,

    /// Set aside on appeal or procedural grounds; archived
    Overturned,
}

impl WarningStatus {
    /// Statuses that permanently remove a warning from escalation
    pub fn is_inactive(&self) -> bool {
        matches!(self, WarningStatus::Expired | WarningStatus::Overturned)
    }
}

/// Outcome recorded at a review follow-up, set once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewOutcome {
    /// Improvement commitment met
    Satisfactory,

    /// Partial improvement, monitoring continues
    SomeConcerns,

    /// Commitment not met
    Unsatisfactory,
}

impl ReviewOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            ReviewOutcome::Satisfactory => "Satisfactory",
            ReviewOutcome::SomeConcerns => "Some Concerns",
            ReviewOutcome::Unsatisfactory => "Unsatisfactory",
        }
    }
}

/// Snapshot of the recommendation shown to the issuer, retained for audit
///
/// The engine's suggestion is advisory; the level finally persisted may
/// differ. Keeping the snapshot alongside the record preserves what the
/// wizard recommended at issuance time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSnapshot {
    /// Level the engine suggested
    pub suggested_level: WarningLevel,

    /// Whether the suggestion escalated over prior active warnings
    pub is_escalation: bool,

    /// Active same-category warnings counted at evaluation time
    pub category_warning_count: usize,

    /// Human-readable justification
    pub reason: String,
}

/// A persisted disciplinary warning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    /// Unique record identifier
    pub id: WarningId,

    /// Employee the warning was issued to
    pub employee_id: EmployeeId,

    /// Misconduct category
    pub category_id: CategoryId,

    /// Level issued (possibly an override of the recommendation)
    pub level: WarningLevel,

    /// When the warning was formally issued
    pub issue_date: DateTime<Utc>,

    /// When the incident occurred
    pub incident_date: DateTime<Utc>,

    /// Validity period in calendar months
    pub validity_period: ValidityPeriod,

    /// Derived expiry instant, stored for query efficiency
    pub expiry_date: DateTime<Utc>,

    /// Lifecycle status
    pub status: WarningStatus,

    /// What happened, as recorded on the warning document
    pub incident_description: String,

    /// Corrective-action commitment, when the warning includes one
    pub corrective_action: Option<String>,

    /// Manager or HR user who issued the warning
    pub issued_by: String,

    /// Follow-up review date, when a corrective-action commitment was made
    pub review_date: Option<NaiveDate>,

    /// Outcome recorded at review; write-once
    pub review_outcome: Option<ReviewOutcome>,

    /// When the outcome was recorded
    pub reviewed_at: Option<DateTime<Utc>>,

    /// Who recorded the outcome
    pub reviewed_by: Option<String>,

    /// The engine's recommendation at issuance, for audit
    pub recommendation: Option<RecommendationSnapshot>,
}

impl Warning {
    /// Is this warning currently counted toward escalation?
    ///
    /// Active means: not expired or overturned, and `now` is still before
    /// the expiry instant. Discipline resets once a warning lapses.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        !self.status.is_inactive() && now < self.expiry_date
    }

    /// Has the validity period elapsed at `now`, regardless of stored status?
    pub fn has_lapsed(&self, now: DateTime<Utc>) -> bool {
        now >= self.expiry_date
    }

    /// Has a review outcome been recorded?
    pub fn is_reviewed(&self) -> bool {
        self.review_outcome.is_some()
    }
}

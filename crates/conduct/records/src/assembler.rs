//! Warning record assembly
//!
//! `WarningDraft` collects everything the issuance wizard gathers and
//! `assemble` is the single validating constructor for [`Warning`]: date
//! ordering, level validity and required fields are checked here, and the
//! expiry date is computed here. Partial or legacy records never enter the
//! core through any other door.

use chrono::{DateTime, NaiveDate, Utc};
use conduct_catalog::Catalog;
use conduct_engine::validity;
use conduct_types::{
    CategoryId, EmployeeId, RecommendationSnapshot, ValidationError, ValidityPeriod, Warning,
    WarningId, WarningLevel, WarningStatus,
};

/// Issuance input, assembled into a [`Warning`] after validation
#[derive(Debug, Clone)]
pub struct WarningDraft {
    employee_id: EmployeeId,
    category_id: CategoryId,
    level: WarningLevel,
    issued_by: String,
    issue_date: DateTime<Utc>,
    incident_date: DateTime<Utc>,
    validity_period: ValidityPeriod,
    incident_description: String,
    corrective_action: Option<String>,
    review_date: Option<NaiveDate>,
    delivered_on_issue: bool,
    recommendation: Option<RecommendationSnapshot>,
}

impl WarningDraft {
    /// Start a draft
    ///
    /// The incident date defaults to the issue date and the validity period
    /// to six months; both can be overridden.
    pub fn new(
        employee_id: EmployeeId,
        category_id: CategoryId,
        level: WarningLevel,
        issued_by: impl Into<String>,
        issue_date: DateTime<Utc>,
    ) -> Self {
        Self {
            employee_id,
            category_id,
            level,
            issued_by: issued_by.into(),
            issue_date,
            incident_date: issue_date,
            validity_period: ValidityPeriod::SixMonths,
            incident_description: String::new(),
            corrective_action: None,
            review_date: None,
            delivered_on_issue: false,
            recommendation: None,
        }
    }

    /// Set when the incident occurred
    pub fn with_incident_date(mut self, incident_date: DateTime<Utc>) -> Self {
        self.incident_date = incident_date;
        self
    }

    /// Set the validity period
    pub fn with_validity_period(mut self, period: ValidityPeriod) -> Self {
        self.validity_period = period;
        self
    }

    /// Set the incident description (required)
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.incident_description = description.into();
        self
    }

    /// Commit to a corrective action with a follow-up review date
    pub fn with_corrective_action(
        mut self,
        action: impl Into<String>,
        review_date: NaiveDate,
    ) -> Self {
        self.corrective_action = Some(action.into());
        self.review_date = Some(review_date);
        self
    }

    /// Record that delivery happened at issuance (historical/manual entry)
    pub fn delivered_on_issue(mut self) -> Self {
        self.delivered_on_issue = true;
        self
    }

    /// Retain the engine's recommendation for audit
    pub fn with_recommendation(mut self, snapshot: RecommendationSnapshot) -> Self {
        self.recommendation = Some(snapshot);
        self
    }

    /// Validate and build the persistable warning
    pub fn assemble(self, catalog: &Catalog, now: DateTime<Utc>) -> Result<Warning, ValidationError> {
        if self.incident_description.trim().is_empty() {
            return Err(ValidationError::missing_field("incident_description"));
        }
        if self.issued_by.trim().is_empty() {
            return Err(ValidationError::missing_field("issued_by"));
        }
        if self.issue_date > now {
            return Err(ValidationError::IssueDateInFuture {
                issue_date: self.issue_date,
                now,
            });
        }
        if self.incident_date > self.issue_date {
            return Err(ValidationError::IncidentAfterIssue {
                incident_date: self.incident_date,
                issue_date: self.issue_date,
            });
        }
        if let Some(review_date) = self.review_date {
            if review_date <= self.issue_date.date_naive() {
                return Err(ValidationError::ReviewNotAfterIssue {
                    review_date,
                    issue_date: self.issue_date,
                });
            }
            match &self.corrective_action {
                Some(action) if !action.trim().is_empty() => {}
                _ => return Err(ValidationError::missing_field("corrective_action")),
            }
        }
        if !catalog.is_valid_level(&self.category_id, self.level) {
            return Err(ValidationError::LevelNotInPath {
                category: self.category_id,
                level: self.level,
            });
        }

        let status = if self.delivered_on_issue {
            WarningStatus::Delivered
        } else {
            WarningStatus::Issued
        };

        Ok(Warning {
            id: WarningId::generate(),
            employee_id: self.employee_id,
            category_id: self.category_id,
            level: self.level,
            issue_date: self.issue_date,
            incident_date: self.incident_date,
            validity_period: self.validity_period,
            expiry_date: validity::expiry_date(self.issue_date, self.validity_period),
            status,
            incident_description: self.incident_description,
            corrective_action: self.corrective_action,
            issued_by: self.issued_by,
            review_date: self.review_date,
            review_outcome: None,
            reviewed_at: None,
            reviewed_by: None,
            recommendation: self.recommendation,
        })
    }
}

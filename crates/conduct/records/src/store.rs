//! Warning storage seam
//!
//! The document store behind the product is an external collaborator; the
//! core only speaks this narrow async contract. Timestamps crossing the
//! boundary are already normalized to UTC by the adapter.

use crate::error::StoreError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use conduct_types::{EmployeeId, ReviewOutcome, Warning, WarningId, WarningStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Partial update applied to a stored warning
///
/// Review fields are write-once: the store rejects an update carrying an
/// outcome when one is already recorded, which keeps the review state
/// machine's completed state terminal under concurrent submissions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WarningUpdate {
    /// New lifecycle status
    pub status: Option<WarningStatus>,

    /// Review outcome (write-once)
    pub review_outcome: Option<ReviewOutcome>,

    /// When the outcome was recorded
    pub reviewed_at: Option<DateTime<Utc>>,

    /// Who recorded the outcome
    pub reviewed_by: Option<String>,
}

impl WarningUpdate {
    /// Update only the lifecycle status
    pub fn status(status: WarningStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Record a review outcome
    pub fn review(
        outcome: ReviewOutcome,
        reviewed_by: impl Into<String>,
        reviewed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            status: None,
            review_outcome: Some(outcome),
            reviewed_at: Some(reviewed_at),
            reviewed_by: Some(reviewed_by.into()),
        }
    }

    /// Does this update change anything?
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// The contract the warning document store fulfils
#[async_trait]
pub trait WarningStore: Send + Sync {
    /// Fetch a warning by id
    async fn warning(&self, id: &WarningId) -> Result<Warning, StoreError>;

    /// Fetch an employee's full warning history
    async fn warnings_for_employee(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Vec<Warning>, StoreError>;

    /// Persist a newly assembled warning
    async fn save_warning(&self, warning: Warning) -> Result<WarningId, StoreError>;

    /// Apply a partial update and return the stored result
    async fn update_warning(
        &self,
        id: &WarningId,
        update: WarningUpdate,
    ) -> Result<Warning, StoreError>;
}

/// In-memory store for tests and development
#[derive(Debug, Default)]
pub struct InMemoryWarningStore {
    warnings: RwLock<HashMap<WarningId, Warning>>,
}

impl InMemoryWarningStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored warnings
    pub async fn len(&self) -> usize {
        self.warnings.read().await.len()
    }

    /// Is the store empty?
    pub async fn is_empty(&self) -> bool {
        self.warnings.read().await.is_empty()
    }
}

#[async_trait]
impl WarningStore for InMemoryWarningStore {
    async fn warning(&self, id: &WarningId) -> Result<Warning, StoreError> {
        let warnings = self.warnings.read().await;
        warnings
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::WarningNotFound(id.clone()))
    }

    async fn warnings_for_employee(
        &self,
        employee_id: &EmployeeId,
    ) -> Result<Vec<Warning>, StoreError> {
        let warnings = self.warnings.read().await;
        let mut result: Vec<Warning> = warnings
            .values()
            .filter(|w| &w.employee_id == employee_id)
            .cloned()
            .collect();
        // Stable, newest first - the order dashboards display
        result.sort_by(|a, b| b.issue_date.cmp(&a.issue_date));
        Ok(result)
    }

    async fn save_warning(&self, warning: Warning) -> Result<WarningId, StoreError> {
        let id = warning.id.clone();
        let mut warnings = self.warnings.write().await;
        warnings.insert(id.clone(), warning);
        Ok(id)
    }

    async fn update_warning(
        &self,
        id: &WarningId,
        update: WarningUpdate,
    ) -> Result<Warning, StoreError> {
        let mut warnings = self.warnings.write().await;
        let warning = warnings
            .get_mut(id)
            .ok_or_else(|| StoreError::WarningNotFound(id.clone()))?;

        if update.review_outcome.is_some() && warning.review_outcome.is_some() {
            return Err(StoreError::ReviewAlreadyRecorded(id.clone()));
        }

        if let Some(status) = update.status {
            warning.status = status;
        }
        if let Some(outcome) = update.review_outcome {
            warning.review_outcome = Some(outcome);
            warning.reviewed_at = update.reviewed_at;
            warning.reviewed_by = update.reviewed_by;
        }

        Ok(warning.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use conduct_engine::validity;
    use conduct_types::{CategoryId, ValidityPeriod, WarningLevel};

    fn warning(employee: &str, issue: DateTime<Utc>) -> Warning {
        let period = ValidityPeriod::SixMonths;
        Warning {
            id: WarningId::generate(),
            employee_id: EmployeeId::new(employee),
            category_id: CategoryId::new("attendance"),
            level: WarningLevel::Verbal,
            issue_date: issue,
            incident_date: issue,
            validity_period: period,
            expiry_date: validity::expiry_date(issue, period),
            status: WarningStatus::Issued,
            incident_description: "test".into(),
            corrective_action: None,
            issued_by: "mgr-1".into(),
            review_date: None,
            review_outcome: None,
            reviewed_at: None,
            reviewed_by: None,
            recommendation: None,
        }
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 9, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_save_and_fetch() {
        let store = InMemoryWarningStore::new();
        let warning = warning("emp-1", at(2024, 3, 1));
        let id = store.save_warning(warning.clone()).await.unwrap();

        let fetched = store.warning(&id).await.unwrap();
        assert_eq!(fetched, warning);
    }

    #[tokio::test]
    async fn test_missing_warning_is_not_found() {
        let store = InMemoryWarningStore::new();
        let err = store.warning(&WarningId::generate()).await.unwrap_err();
        assert!(matches!(err, StoreError::WarningNotFound(_)));
    }

    #[tokio::test]
    async fn test_history_is_per_employee_newest_first() {
        let store = InMemoryWarningStore::new();
        store.save_warning(warning("emp-1", at(2024, 1, 1))).await.unwrap();
        store.save_warning(warning("emp-1", at(2024, 4, 1))).await.unwrap();
        store.save_warning(warning("emp-2", at(2024, 2, 1))).await.unwrap();

        let history = store
            .warnings_for_employee(&EmployeeId::new("emp-1"))
            .await
            .unwrap();
        assert_eq!(history.len(), 2);
        assert!(history[0].issue_date > history[1].issue_date);
    }

    #[tokio::test]
    async fn test_status_update() {
        let store = InMemoryWarningStore::new();
        let id = store
            .save_warning(warning("emp-1", at(2024, 3, 1)))
            .await
            .unwrap();

        let updated = store
            .update_warning(&id, WarningUpdate::status(WarningStatus::Delivered))
            .await
            .unwrap();
        assert_eq!(updated.status, WarningStatus::Delivered);
    }

    #[tokio::test]
    async fn test_review_outcome_is_write_once() {
        let store = InMemoryWarningStore::new();
        let id = store
            .save_warning(warning("emp-1", at(2024, 3, 1)))
            .await
            .unwrap();

        let first = WarningUpdate::review(ReviewOutcome::Satisfactory, "hr-1", at(2024, 4, 1));
        store.update_warning(&id, first).await.unwrap();

        let second =
            WarningUpdate::review(ReviewOutcome::Unsatisfactory, "hr-2", at(2024, 4, 2));
        let err = store.update_warning(&id, second).await.unwrap_err();
        assert!(matches!(err, StoreError::ReviewAlreadyRecorded(_)));

        // The first outcome stands
        let stored = store.warning(&id).await.unwrap();
        assert_eq!(stored.review_outcome, Some(ReviewOutcome::Satisfactory));
        assert_eq!(stored.reviewed_by.as_deref(), Some("hr-1"));
    }
}

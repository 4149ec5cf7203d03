//! Discipline orchestration service
//!
//! The service is the seam between the pure decision core and the storage
//! collaborator: it fetches history, runs the resolver, assembles validated
//! records, applies lifecycle transitions and logs every decision for the
//! audit trail. UI layers call this; the core never touches the store.

use crate::assembler::WarningDraft;
use crate::error::{DisciplineError, Result};
use crate::store::{WarningStore, WarningUpdate};
use chrono::{DateTime, Utc};
use conduct_catalog::Catalog;
use conduct_engine::{
    classify_reviews, EscalationResolver, RecommendationCard, ReviewFollowUp, ReviewPolicy,
};
use conduct_types::{
    CategoryId, EmployeeId, ReviewOutcome, Warning, WarningId, WarningStatus,
};
use tracing::{debug, info, warn};

/// Orchestrates recommendation, issuance and lifecycle updates
#[derive(Debug)]
pub struct DisciplineService<S> {
    store: S,
    resolver: EscalationResolver,
    review_policy: ReviewPolicy,
}

impl<S: WarningStore> DisciplineService<S> {
    /// Create a service over a store and an organization's catalog
    pub fn new(store: S, catalog: Catalog) -> Self {
        Self {
            store,
            resolver: EscalationResolver::new(catalog),
            review_policy: ReviewPolicy::default(),
        }
    }

    /// Override the review policy
    pub fn with_review_policy(mut self, policy: ReviewPolicy) -> Self {
        self.review_policy = policy;
        self
    }

    /// The catalog in use
    pub fn catalog(&self) -> &Catalog {
        self.resolver.catalog()
    }

    /// The review policy in use
    pub fn review_policy(&self) -> &ReviewPolicy {
        &self.review_policy
    }

    /// Compute the recommended next level for a new incident
    ///
    /// Fetches the employee's history and hands it to the resolver. Never
    /// blocks issuance on catalog gaps; see `conduct-catalog` for the
    /// fallback behavior.
    pub async fn recommend(
        &self,
        employee_id: &EmployeeId,
        category_id: &CategoryId,
        now: DateTime<Utc>,
    ) -> Result<RecommendationCard> {
        let history = self.store.warnings_for_employee(employee_id).await?;
        let card = self
            .resolver
            .resolve_with_card(employee_id, category_id, &history, now);
        self.log_recommendation(&card);
        Ok(card)
    }

    /// Validate, assemble and persist a new warning
    pub async fn issue(&self, draft: WarningDraft, now: DateTime<Utc>) -> Result<Warning> {
        let warning = draft.assemble(self.resolver.catalog(), now)?;
        self.store.save_warning(warning.clone()).await?;
        info!(
            warning = %warning.id,
            employee = %warning.employee_id,
            category = %warning.category_id,
            level = %warning.level,
            expires = %warning.expiry_date,
            "warning issued"
        );
        Ok(warning)
    }

    /// Confirm delivery of an issued warning
    ///
    /// Idempotent for already-delivered warnings; expired or overturned
    /// warnings cannot be delivered.
    pub async fn mark_delivered(&self, id: &WarningId) -> Result<Warning> {
        let warning = self.store.warning(id).await?;
        match warning.status {
            WarningStatus::Delivered => Ok(warning),
            WarningStatus::Issued => {
                let updated = self
                    .store
                    .update_warning(id, WarningUpdate::status(WarningStatus::Delivered))
                    .await?;
                info!(warning = %id, "delivery confirmed");
                Ok(updated)
            }
            from => Err(DisciplineError::InvalidStatusTransition {
                id: id.clone(),
                from,
                to: WarningStatus::Delivered,
            }),
        }
    }

    /// Set a warning aside on appeal or procedural grounds
    ///
    /// Overturned warnings stop counting toward escalation immediately and
    /// permanently; the record itself is archived, never deleted.
    pub async fn overturn(&self, id: &WarningId) -> Result<Warning> {
        let warning = self.store.warning(id).await?;
        if warning.status == WarningStatus::Overturned {
            return Ok(warning);
        }
        let updated = self
            .store
            .update_warning(id, WarningUpdate::status(WarningStatus::Overturned))
            .await?;
        warn!(warning = %id, employee = %updated.employee_id, "warning overturned");
        Ok(updated)
    }

    /// Record the outcome of a review follow-up
    ///
    /// Outcomes are write-once; a second submission fails with
    /// [`StoreError::ReviewAlreadyRecorded`].
    ///
    /// [`StoreError::ReviewAlreadyRecorded`]: crate::error::StoreError::ReviewAlreadyRecorded
    pub async fn record_review_outcome(
        &self,
        id: &WarningId,
        outcome: ReviewOutcome,
        reviewed_by: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<Warning> {
        let updated = self
            .store
            .update_warning(id, WarningUpdate::review(outcome, reviewed_by, now))
            .await?;
        info!(
            warning = %id,
            outcome = outcome.label(),
            reviewer = updated.reviewed_by.as_deref().unwrap_or(""),
            "review outcome recorded"
        );
        Ok(updated)
    }

    /// Flip the stored status of naturally lapsed warnings to `Expired`
    ///
    /// Activity is always computed from the expiry date on read; this pass
    /// only keeps stored statuses aligned for query efficiency. Returns the
    /// number of warnings updated.
    pub async fn refresh_expired(
        &self,
        employee_id: &EmployeeId,
        now: DateTime<Utc>,
    ) -> Result<usize> {
        let history = self.store.warnings_for_employee(employee_id).await?;
        let mut refreshed = 0;
        for warning in history {
            if !warning.status.is_inactive() && warning.has_lapsed(now) {
                self.store
                    .update_warning(&warning.id, WarningUpdate::status(WarningStatus::Expired))
                    .await?;
                refreshed += 1;
            }
        }
        if refreshed > 0 {
            debug!(employee = %employee_id, count = refreshed, "expired warnings refreshed");
        }
        Ok(refreshed)
    }

    /// Classify the employee's review commitments for dashboard display
    ///
    /// Only warnings that carry a review commitment (a review date or a
    /// recorded outcome) appear in the result.
    pub async fn review_dashboard(
        &self,
        employee_id: &EmployeeId,
        now: DateTime<Utc>,
    ) -> Result<Vec<(WarningId, ReviewFollowUp)>> {
        let history = self.store.warnings_for_employee(employee_id).await?;
        let committed: Vec<&Warning> = history
            .iter()
            .filter(|w| w.review_date.is_some() || w.review_outcome.is_some())
            .collect();
        Ok(classify_reviews(committed, now, &self.review_policy))
    }

    /// Log a recommendation for the audit trail
    fn log_recommendation(&self, card: &RecommendationCard) {
        let rec = &card.recommendation;
        if rec.is_escalation {
            info!(
                card = %card.id,
                employee = %card.employee_id,
                category = %card.category_id,
                suggested = %rec.suggested_level,
                active_warnings = rec.category_warning_count,
                "escalation recommended"
            );
        } else {
            debug!(
                card = %card.id,
                employee = %card.employee_id,
                category = %card.category_id,
                suggested = %rec.suggested_level,
                "first-offense recommendation"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryWarningStore;
    use chrono::{Duration, TimeZone};
    use conduct_catalog::standard_catalog;
    use conduct_types::WarningLevel;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn service() -> DisciplineService<InMemoryWarningStore> {
        DisciplineService::new(InMemoryWarningStore::new(), standard_catalog())
    }

    fn draft(level: WarningLevel, issue: DateTime<Utc>) -> WarningDraft {
        WarningDraft::new(
            EmployeeId::new("emp-1"),
            CategoryId::new("attendance"),
            level,
            "mgr-1",
            issue,
        )
        .with_description("Late without notice")
    }

    #[tokio::test]
    async fn test_recommend_without_history() {
        let service = service();
        let card = service
            .recommend(&EmployeeId::new("emp-1"), &CategoryId::new("attendance"), now())
            .await
            .unwrap();
        assert_eq!(card.suggested_level(), WarningLevel::Counselling);
        assert!(!card.recommendation.is_escalation);
    }

    #[tokio::test]
    async fn test_issue_then_recommend_escalates() {
        let service = service();
        service
            .issue(draft(WarningLevel::Counselling, now() - Duration::days(30)), now())
            .await
            .unwrap();

        let card = service
            .recommend(&EmployeeId::new("emp-1"), &CategoryId::new("attendance"), now())
            .await
            .unwrap();
        assert_eq!(card.suggested_level(), WarningLevel::Verbal);
        assert!(card.recommendation.is_escalation);
    }

    #[tokio::test]
    async fn test_validation_failure_surfaces() {
        let service = service();
        let bad = draft(WarningLevel::Dismissal, now() - Duration::days(1));
        let err = service.issue(bad, now()).await.unwrap_err();
        assert!(matches!(err, DisciplineError::Validation(_)));
    }

    #[tokio::test]
    async fn test_mark_delivered_is_idempotent() {
        let service = service();
        let warning = service
            .issue(draft(WarningLevel::Verbal, now() - Duration::days(1)), now())
            .await
            .unwrap();

        let delivered = service.mark_delivered(&warning.id).await.unwrap();
        assert_eq!(delivered.status, WarningStatus::Delivered);

        let again = service.mark_delivered(&warning.id).await.unwrap();
        assert_eq!(again.status, WarningStatus::Delivered);
    }

    #[tokio::test]
    async fn test_overturned_warning_cannot_be_delivered() {
        let service = service();
        let warning = service
            .issue(draft(WarningLevel::Verbal, now() - Duration::days(1)), now())
            .await
            .unwrap();
        service.overturn(&warning.id).await.unwrap();

        let err = service.mark_delivered(&warning.id).await.unwrap_err();
        assert!(matches!(
            err,
            DisciplineError::InvalidStatusTransition { .. }
        ));
    }

    #[tokio::test]
    async fn test_refresh_expired_flips_lapsed_warnings() {
        let service = service();
        // Issued a year before `now`, six months validity: long lapsed
        let old_issue = now() - Duration::days(365);
        service.issue(draft(WarningLevel::Verbal, old_issue), now()).await.unwrap();

        let refreshed = service
            .refresh_expired(&EmployeeId::new("emp-1"), now())
            .await
            .unwrap();
        assert_eq!(refreshed, 1);

        // Second pass finds nothing left to refresh
        let refreshed = service
            .refresh_expired(&EmployeeId::new("emp-1"), now())
            .await
            .unwrap();
        assert_eq!(refreshed, 0);
    }
}

//! Escalation recommendation types
//!
//! A recommendation is ephemeral and advisory: the issuing UI may override
//! the suggested level with any level valid for the category. The card
//! variant wraps a recommendation with identifiers for the audit trail.

use chrono::{DateTime, Utc};
use conduct_types::{
    CategoryId, EmployeeId, RecommendationSnapshot, Warning, WarningLevel,
};
use serde::{Deserialize, Serialize};

/// The engine's suggestion for the next warning level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscalationRecommendation {
    /// Level the category's escalation path calls for next
    pub suggested_level: WarningLevel,

    /// True whenever any active prior warning exists in the category -
    /// the new warning steps up from (or re-treads) earlier discipline
    pub is_escalation: bool,

    /// Number of active warnings in the same category
    pub category_warning_count: usize,

    /// Human-readable justification for the suggestion
    pub reason: String,

    /// The filtered set of active same-category warnings used in the
    /// computation, for display alongside the suggestion
    pub active_warnings: Vec<Warning>,
}

impl EscalationRecommendation {
    /// Is this the first offense in the category?
    pub fn is_first_offense(&self) -> bool {
        self.category_warning_count == 0
    }

    /// Compact form retained on the persisted warning for audit
    pub fn snapshot(&self) -> RecommendationSnapshot {
        RecommendationSnapshot {
            suggested_level: self.suggested_level,
            is_escalation: self.is_escalation,
            category_warning_count: self.category_warning_count,
            reason: self.reason.clone(),
        }
    }
}

/// Audit record for a recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationCard {
    /// Unique identifier for this evaluation
    pub id: String,

    /// Employee the recommendation was computed for
    pub employee_id: EmployeeId,

    /// Category of the new incident
    pub category_id: CategoryId,

    /// The recommendation itself
    pub recommendation: EscalationRecommendation,

    /// Size of the full history that was considered (before filtering)
    pub history_size: usize,

    /// The instant the evaluation was computed against
    pub evaluated_at: DateTime<Utc>,
}

impl RecommendationCard {
    /// Create a new card
    pub fn new(
        employee_id: EmployeeId,
        category_id: CategoryId,
        recommendation: EscalationRecommendation,
        history_size: usize,
        evaluated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            employee_id,
            category_id,
            recommendation,
            history_size,
            evaluated_at,
        }
    }

    /// The suggested level, for callers that only need the headline
    pub fn suggested_level(&self) -> WarningLevel {
        self.recommendation.suggested_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn recommendation() -> EscalationRecommendation {
        EscalationRecommendation {
            suggested_level: WarningLevel::FirstWritten,
            is_escalation: true,
            category_warning_count: 1,
            reason: "1 active warning in this category".into(),
            active_warnings: vec![],
        }
    }

    #[test]
    fn test_snapshot_drops_warning_copies() {
        let rec = recommendation();
        let snapshot = rec.snapshot();
        assert_eq!(snapshot.suggested_level, WarningLevel::FirstWritten);
        assert!(snapshot.is_escalation);
        assert_eq!(snapshot.category_warning_count, 1);
    }

    #[test]
    fn test_card_carries_evaluation_instant() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let card = RecommendationCard::new(
            EmployeeId::new("emp-1"),
            CategoryId::new("attendance"),
            recommendation(),
            4,
            now,
        );
        assert_eq!(card.evaluated_at, now);
        assert_eq!(card.history_size, 4);
        assert_eq!(card.suggested_level(), WarningLevel::FirstWritten);
        assert!(!card.id.is_empty());
    }
}

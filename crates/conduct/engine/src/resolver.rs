//! Escalation resolver
//!
//! Decides which warning level a new incident in a category calls for,
//! given the employee's warning history. Only active warnings in the same
//! category count: expired and overturned warnings reset discipline.

use crate::recommendation::{EscalationRecommendation, RecommendationCard};
use chrono::{DateTime, Utc};
use conduct_catalog::Catalog;
use conduct_types::{CategoryId, EmployeeId, Warning};

/// Computes next-level recommendations against an injected catalog
#[derive(Debug, Clone)]
pub struct EscalationResolver {
    catalog: Catalog,
}

impl EscalationResolver {
    /// Create a resolver for the given catalog
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog this resolver consults
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Recommend the next warning level for a new incident
    ///
    /// `history` is the employee's full warning history as supplied by the
    /// storage layer; the resolver filters it to active warnings in
    /// `category_id` itself. The result is advisory - the issuing UI may
    /// override it with any level valid for the category.
    ///
    /// Never fails: an unknown category falls back to the generic path, and
    /// a warning whose level is absent from the current path (the catalog
    /// was edited after issuance) still counts toward the warning total but
    /// ranks below every configured step.
    pub fn resolve(
        &self,
        category_id: &CategoryId,
        history: &[Warning],
        now: DateTime<Utc>,
    ) -> EscalationRecommendation {
        let path = self.catalog.escalation_path(category_id);
        let active: Vec<Warning> = history
            .iter()
            .filter(|w| &w.category_id == category_id && w.is_active(now))
            .cloned()
            .collect();

        if active.is_empty() {
            let first = path[0];
            return EscalationRecommendation {
                suggested_level: first,
                is_escalation: false,
                category_warning_count: 0,
                reason: format!(
                    "First offense in this category; starting at {}",
                    first.label()
                ),
                active_warnings: active,
            };
        }

        // Highest step already reached, per the category's own ordering.
        let highest = active
            .iter()
            .filter_map(|w| path.iter().position(|l| *l == w.level))
            .max();

        let count = active.len();
        let (suggested_level, reason) = match highest {
            Some(index) if index + 1 < path.len() => {
                let next = path[index + 1];
                (
                    next,
                    format!(
                        "{} active warning(s) in this category; escalating from {} to {}",
                        count,
                        path[index].label(),
                        next.label()
                    ),
                )
            }
            Some(index) => {
                // Already at the terminal step; the path does not wrap.
                let last = path[index];
                (
                    last,
                    format!(
                        "{} active warning(s) in this category; {} is the final step of the escalation path",
                        count,
                        last.label()
                    ),
                )
            }
            None => {
                // Every active level predates the current path configuration.
                let first = path[0];
                (
                    first,
                    format!(
                        "{} active warning(s) with levels outside the current escalation path; restarting at {}",
                        count,
                        first.label()
                    ),
                )
            }
        };

        EscalationRecommendation {
            suggested_level,
            is_escalation: true,
            category_warning_count: count,
            reason,
            active_warnings: active,
        }
    }

    /// Recommend and wrap the result in an audit card
    pub fn resolve_with_card(
        &self,
        employee_id: &EmployeeId,
        category_id: &CategoryId,
        history: &[Warning],
        now: DateTime<Utc>,
    ) -> RecommendationCard {
        let recommendation = self.resolve(category_id, history, now);
        RecommendationCard::new(
            employee_id.clone(),
            category_id.clone(),
            recommendation,
            history.len(),
            now,
        )
    }
}

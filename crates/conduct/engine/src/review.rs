//! Review follow-up state machine
//!
//! When a warning carries a corrective-action commitment, a review date is
//! set and a follow-up is expected. The follow-up state is a pure function
//! of the review date, the recorded outcome and `now` - it is derived on
//! every read and never stored, because "now" constantly moves it.
//!
//! A review left unaddressed past the grace period closes automatically:
//! open loops older than a week are presumed resolved rather than left
//! pending indefinitely.

use chrono::{DateTime, NaiveDate, Utc};
use conduct_types::{ReviewOutcome, Warning, WarningId};
use serde::{Deserialize, Serialize};

/// Days past the review date before an unaddressed review closes itself
pub const DEFAULT_AUTO_SATISFY_GRACE_DAYS: i64 = 7;

/// Organization-tunable review policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewPolicy {
    /// Grace period, in whole days, before auto-satisfaction
    #[serde(default = "default_grace_days")]
    pub auto_satisfy_grace_days: i64,
}

fn default_grace_days() -> i64 {
    DEFAULT_AUTO_SATISFY_GRACE_DAYS
}

impl Default for ReviewPolicy {
    fn default() -> Self {
        Self {
            auto_satisfy_grace_days: DEFAULT_AUTO_SATISFY_GRACE_DAYS,
        }
    }
}

/// Derived follow-up state of a warning's review commitment
///
/// Exactly one state applies to any (review date, outcome, now) triple.
/// `Completed` and `AutoSatisfied` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ReviewFollowUp {
    /// Review is scheduled (or no date was set yet)
    Pending {
        /// Whole days until the review date; `None` when no date is set
        days_until_review: Option<i64>,
    },

    /// Review date has passed within the grace period and no outcome is
    /// recorded yet
    Overdue {
        /// Whole days since the review date
        days_since_review: i64,
    },

    /// Unaddressed past the grace period; closed automatically
    AutoSatisfied {
        /// Whole days since the review date
        days_since_review: i64,
    },

    /// An outcome was recorded
    Completed {
        /// The recorded outcome
        outcome: ReviewOutcome,
    },
}

impl ReviewFollowUp {
    /// Terminal states need no further action
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ReviewFollowUp::Completed { .. } | ReviewFollowUp::AutoSatisfied { .. }
        )
    }

    /// States a reviewer still needs to act on
    pub fn needs_action(&self) -> bool {
        !self.is_terminal()
    }

    /// Dashboard badge label
    pub fn label(&self) -> &'static str {
        match self {
            ReviewFollowUp::Pending { .. } => "pending",
            ReviewFollowUp::Overdue { .. } => "overdue",
            ReviewFollowUp::AutoSatisfied { .. } => "auto-satisfied",
            ReviewFollowUp::Completed { .. } => "completed",
        }
    }

    /// Is this a pending review due within `days` days?
    ///
    /// Used by "due soon" dashboard filters; overdue and terminal states
    /// are excluded.
    pub fn due_within(&self, days: i64) -> bool {
        matches!(
            self,
            ReviewFollowUp::Pending {
                days_until_review: Some(d),
            } if *d <= days
        )
    }
}

/// Classify a review commitment at `now`
///
/// Both dates are normalized to whole days (midnight boundaries in UTC)
/// before comparison. Total: every input triple maps to exactly one state.
pub fn review_follow_up(
    review_date: Option<NaiveDate>,
    outcome: Option<ReviewOutcome>,
    now: DateTime<Utc>,
    policy: &ReviewPolicy,
) -> ReviewFollowUp {
    if let Some(outcome) = outcome {
        return ReviewFollowUp::Completed { outcome };
    }

    let Some(review_date) = review_date else {
        return ReviewFollowUp::Pending {
            days_until_review: None,
        };
    };

    let today = now.date_naive();
    let diff_days = (review_date - today).num_days();

    if diff_days < -policy.auto_satisfy_grace_days {
        ReviewFollowUp::AutoSatisfied {
            days_since_review: -diff_days,
        }
    } else if diff_days < 0 {
        ReviewFollowUp::Overdue {
            days_since_review: -diff_days,
        }
    } else {
        ReviewFollowUp::Pending {
            days_until_review: Some(diff_days),
        }
    }
}

/// Classify a warning's review commitment at `now`
pub fn warning_follow_up(
    warning: &Warning,
    now: DateTime<Utc>,
    policy: &ReviewPolicy,
) -> ReviewFollowUp {
    review_follow_up(warning.review_date, warning.review_outcome, now, policy)
}

/// Classify a whole slice of warnings for dashboard display
pub fn classify_reviews<'a>(
    warnings: impl IntoIterator<Item = &'a Warning>,
    now: DateTime<Utc>,
    policy: &ReviewPolicy,
) -> Vec<(WarningId, ReviewFollowUp)> {
    warnings
        .into_iter()
        .map(|w| (w.id.clone(), warning_follow_up(w, now, policy)))
        .collect()
}

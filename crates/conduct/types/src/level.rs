//! Warning levels - the shared ladder of progressive-discipline actions
//!
//! Levels form a common vocabulary; each category orders a subset of them
//! into its own escalation path. "Higher" is defined by a category's path,
//! not by this enum's declaration order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A progressive-discipline action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningLevel {
    /// Informal counselling session
    Counselling,

    /// Verbal warning (recorded)
    Verbal,

    /// First written warning
    FirstWritten,

    /// Second written warning
    SecondWritten,

    /// Final written warning
    FinalWritten,

    /// Suspension pending enquiry or as sanction
    Suspension,

    /// Termination of employment
    Dismissal,
}

impl WarningLevel {
    /// Display label used on documents and dashboards
    pub fn label(&self) -> &'static str {
        match self {
            WarningLevel::Counselling => "Counselling",
            WarningLevel::Verbal => "Verbal Warning",
            WarningLevel::FirstWritten => "First Written Warning",
            WarningLevel::SecondWritten => "Second Written Warning",
            WarningLevel::FinalWritten => "Final Written Warning",
            WarningLevel::Suspension => "Suspension",
            WarningLevel::Dismissal => "Dismissal",
        }
    }

    /// All known levels, in conventional mildest-to-severest order
    pub fn all() -> [WarningLevel; 7] {
        [
            WarningLevel::Counselling,
            WarningLevel::Verbal,
            WarningLevel::FirstWritten,
            WarningLevel::SecondWritten,
            WarningLevel::FinalWritten,
            WarningLevel::Suspension,
            WarningLevel::Dismissal,
        ]
    }

    /// Does this level end the employment relationship?
    pub fn is_terminal_action(&self) -> bool {
        matches!(self, WarningLevel::Dismissal)
    }

    /// Does issuing this level produce a formal written record?
    pub fn is_written(&self) -> bool {
        matches!(
            self,
            WarningLevel::FirstWritten
                | WarningLevel::SecondWritten
                | WarningLevel::FinalWritten
        )
    }
}

impl fmt::Display for WarningLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_labels() {
        assert_eq!(WarningLevel::Verbal.label(), "Verbal Warning");
        assert_eq!(WarningLevel::FinalWritten.label(), "Final Written Warning");
    }

    #[test]
    fn test_level_serde_snake_case() {
        let json = serde_json::to_string(&WarningLevel::FirstWritten).unwrap();
        assert_eq!(json, "\"first_written\"");

        let level: WarningLevel = serde_json::from_str("\"dismissal\"").unwrap();
        assert_eq!(level, WarningLevel::Dismissal);
    }

    #[test]
    fn test_terminal_action() {
        assert!(WarningLevel::Dismissal.is_terminal_action());
        assert!(!WarningLevel::Suspension.is_terminal_action());
    }

    #[test]
    fn test_written_levels() {
        assert!(WarningLevel::SecondWritten.is_written());
        assert!(!WarningLevel::Verbal.is_written());
        assert!(!WarningLevel::Counselling.is_written());
    }
}

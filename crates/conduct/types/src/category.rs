//! Misconduct categories
//!
//! A category classifies an incident and carries its own escalation path:
//! the ordered sequence of warning levels an employee steps through on
//! repeat offenses within that category.

use crate::error::{ValidationError, ValidationResult};
use crate::ids::CategoryId;
use crate::level::WarningLevel;
use serde::{Deserialize, Serialize};

/// Severity classification of a misconduct category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Minor infractions (late arrival, dress code)
    Minor,

    /// Moderate infractions (repeated absence, negligence)
    Moderate,

    /// Serious infractions (insubordination, safety violations)
    Serious,

    /// Gross misconduct (theft, assault, fraud)
    GrossMisconduct,
}

impl Severity {
    /// May an incident of this severity skip straight to a hearing?
    ///
    /// Gross misconduct conventionally bypasses progressive discipline and
    /// goes to a formal enquiry; the escalation path for such a category is
    /// correspondingly short.
    pub fn warrants_formal_enquiry(&self) -> bool {
        matches!(self, Severity::GrossMisconduct)
    }

    /// Does this severity normally start below a written warning?
    pub fn starts_informal(&self) -> bool {
        matches!(self, Severity::Minor | Severity::Moderate)
    }
}

/// A misconduct category from the organization's catalog
///
/// Created at organization setup and rarely mutated. The escalation path is
/// the category's own ordering of [`WarningLevel`]s, mildest first, terminal
/// action last; no level repeats within one path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Catalog key
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Guidance text shown to managers
    pub description: String,

    /// Severity classification
    pub severity: Severity,

    /// Ordered escalation path, mildest action first
    pub escalation_path: Vec<WarningLevel>,

    /// Documents that must accompany a warning in this category
    pub required_documents: Vec<String>,
}

impl Category {
    /// Create a category, validating its escalation path
    pub fn new(
        id: CategoryId,
        name: impl Into<String>,
        severity: Severity,
        escalation_path: Vec<WarningLevel>,
    ) -> ValidationResult<Self> {
        if escalation_path.is_empty() {
            return Err(ValidationError::EmptyEscalationPath { category: id });
        }
        for (i, level) in escalation_path.iter().enumerate() {
            if escalation_path[..i].contains(level) {
                return Err(ValidationError::DuplicatePathLevel {
                    category: id,
                    level: *level,
                });
            }
        }
        Ok(Self {
            id,
            name: name.into(),
            description: String::new(),
            severity,
            escalation_path,
            required_documents: Vec::new(),
        })
    }

    /// Set the guidance description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a required accompanying document
    pub fn with_required_document(mut self, document: impl Into<String>) -> Self {
        self.required_documents.push(document.into());
        self
    }

    /// Position of a level within this category's escalation path
    pub fn path_index(&self, level: WarningLevel) -> Option<usize> {
        self.escalation_path.iter().position(|l| *l == level)
    }

    /// Does this category's path include the given level?
    pub fn includes_level(&self, level: WarningLevel) -> bool {
        self.path_index(level).is_some()
    }

    /// The mildest action in this category's path
    pub fn first_level(&self) -> WarningLevel {
        // Path is validated non-empty at construction
        self.escalation_path[0]
    }

    /// The terminal action in this category's path
    pub fn final_level(&self) -> WarningLevel {
        self.escalation_path[self.escalation_path.len() - 1]
    }
}

//! Category catalog and builder

use crate::error::{CatalogError, Result};
use conduct_types::{Category, CategoryId, WarningLevel};
use std::collections::HashMap;
use tracing::warn;

/// Fallback path used when a category has no configured escalation path
///
/// Deterministic and identical across calls: generic progressive discipline
/// from counselling through to a final written warning.
pub const DEFAULT_ESCALATION_PATH: [WarningLevel; 5] = [
    WarningLevel::Counselling,
    WarningLevel::Verbal,
    WarningLevel::FirstWritten,
    WarningLevel::SecondWritten,
    WarningLevel::FinalWritten,
];

/// Display label for a warning level
///
/// Pure lookup with no side effects; exposed here because the catalog is the
/// presentation layer's single entry point for discipline vocabulary.
pub fn level_label(level: WarningLevel) -> &'static str {
    level.label()
}

/// Read-only catalog of an organization's misconduct categories
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: HashMap<CategoryId, Category>,
}

impl Catalog {
    /// Start building a catalog
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Look up a category by id
    pub fn category(&self, id: &CategoryId) -> Result<&Category> {
        self.categories
            .get(id)
            .ok_or_else(|| CatalogError::CategoryNotFound(id.clone()))
    }

    /// Iterate all configured categories
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    /// The escalation path for a category
    ///
    /// Falls back to [`DEFAULT_ESCALATION_PATH`] when the category is not
    /// configured. The gap is logged for operators but never fails - see the
    /// crate docs.
    pub fn escalation_path(&self, id: &CategoryId) -> &[WarningLevel] {
        match self.categories.get(id) {
            Some(category) => &category.escalation_path,
            None => {
                warn!(
                    category = %id,
                    "no escalation path configured; falling back to the generic path"
                );
                &DEFAULT_ESCALATION_PATH
            }
        }
    }

    /// Is the level a valid choice for the category?
    ///
    /// Evaluated against [`Self::escalation_path`], so an unconfigured
    /// category accepts the levels of the generic fallback path rather than
    /// rejecting everything.
    pub fn is_valid_level(&self, id: &CategoryId, level: WarningLevel) -> bool {
        self.escalation_path(id).contains(&level)
    }

    /// Number of configured categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Is the catalog empty?
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Validating builder for [`Catalog`]
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    categories: Vec<Category>,
}

impl CatalogBuilder {
    /// Add a category
    pub fn category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// Build the catalog, rejecting duplicate ids
    pub fn build(self) -> Result<Catalog> {
        let mut categories = HashMap::with_capacity(self.categories.len());
        for category in self.categories {
            let id = category.id.clone();
            if categories.insert(id.clone(), category).is_some() {
                return Err(CatalogError::DuplicateCategory(id));
            }
        }
        Ok(Catalog { categories })
    }
}

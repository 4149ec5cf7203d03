//! The seeded catalog a fresh organization starts with
//!
//! Administrators adjust these at setup; the defaults cover the categories
//! most disciplinary codes share. Severity drives where each path starts:
//! minor misconduct begins with counselling, serious misconduct skips the
//! informal steps, gross misconduct goes to suspension pending enquiry.

use crate::catalog::Catalog;
use conduct_types::{Category, CategoryId, Severity, WarningLevel};

/// Build the standard seeded catalog
pub fn standard_catalog() -> Catalog {
    // The seeded definitions are valid by construction, so the builder
    // cannot fail here.
    let categories = [
        Category::new(
            CategoryId::new("attendance"),
            "Attendance",
            Severity::Minor,
            vec![
                WarningLevel::Counselling,
                WarningLevel::Verbal,
                WarningLevel::FirstWritten,
                WarningLevel::SecondWritten,
                WarningLevel::FinalWritten,
            ],
        )
        .map(|c| c.with_description("Unauthorised absence, late arrival, early departure")),
        Category::new(
            CategoryId::new("performance"),
            "Work Performance",
            Severity::Minor,
            vec![
                WarningLevel::Counselling,
                WarningLevel::Verbal,
                WarningLevel::FirstWritten,
                WarningLevel::SecondWritten,
                WarningLevel::FinalWritten,
            ],
        )
        .map(|c| c.with_description("Substandard work, missed deadlines, negligence")),
        Category::new(
            CategoryId::new("insubordination"),
            "Insubordination",
            Severity::Serious,
            vec![
                WarningLevel::FirstWritten,
                WarningLevel::FinalWritten,
                WarningLevel::Dismissal,
            ],
        )
        .map(|c| c.with_description("Refusal of reasonable instructions, abusive conduct")),
        Category::new(
            CategoryId::new("safety"),
            "Health and Safety",
            Severity::Serious,
            vec![
                WarningLevel::Verbal,
                WarningLevel::FirstWritten,
                WarningLevel::FinalWritten,
                WarningLevel::Dismissal,
            ],
        )
        .map(|c| {
            c.with_description("Breach of safety rules or endangerment of others")
                .with_required_document("Incident report")
        }),
        Category::new(
            CategoryId::new("dishonesty"),
            "Dishonesty",
            Severity::GrossMisconduct,
            vec![WarningLevel::Suspension, WarningLevel::Dismissal],
        )
        .map(|c| {
            c.with_description("Theft, fraud, falsification of records")
                .with_required_document("Investigation report")
        }),
    ];

    let mut builder = Catalog::builder();
    for category in categories.into_iter().flatten() {
        builder = builder.category(category);
    }
    match builder.build() {
        Ok(catalog) => catalog,
        // Unreachable: ids above are distinct literals
        Err(_) => Catalog::default(),
    }
}

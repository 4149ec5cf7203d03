//! End-to-end scenarios for the decision core: recommendation, expiry and
//! review follow-up working together over realistic warning histories.

use chrono::{DateTime, Duration, TimeZone, Utc};
use conduct_catalog::Catalog;
use conduct_engine::{
    days_until_expiry, expiry_date, review_follow_up, EscalationResolver, ReviewFollowUp,
    ReviewPolicy,
};
use conduct_types::{
    Category, CategoryId, EmployeeId, ReviewOutcome, Severity, ValidityPeriod, Warning, WarningId,
    WarningLevel, WarningStatus,
};

fn attendance_catalog() -> Catalog {
    Catalog::builder()
        .category(
            Category::new(
                CategoryId::new("attendance"),
                "Attendance",
                Severity::Minor,
                vec![
                    WarningLevel::Counselling,
                    WarningLevel::Verbal,
                    WarningLevel::FirstWritten,
                    WarningLevel::FinalWritten,
                ],
            )
            .expect("valid category"),
        )
        .build()
        .expect("valid catalog")
}

fn warning_issued_at(issue: DateTime<Utc>, level: WarningLevel) -> Warning {
    let period = ValidityPeriod::SixMonths;
    Warning {
        id: WarningId::generate(),
        employee_id: EmployeeId::new("emp-77"),
        category_id: CategoryId::new("attendance"),
        level,
        issue_date: issue,
        incident_date: issue - Duration::days(1),
        validity_period: period,
        expiry_date: expiry_date(issue, period),
        status: WarningStatus::Delivered,
        incident_description: "Repeated late arrival".into(),
        corrective_action: None,
        issued_by: "mgr-9".into(),
        review_date: None,
        review_outcome: None,
        reviewed_at: None,
        reviewed_by: None,
        recommendation: None,
    }
}

#[test]
fn active_verbal_warning_escalates_to_first_written() {
    // One active verbal warning, issued two months ago with six months
    // validity: the next attendance incident calls for a first written.
    let now = Utc.with_ymd_and_hms(2024, 8, 1, 9, 0, 0).unwrap();
    let issued = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
    let history = vec![warning_issued_at(issued, WarningLevel::Verbal)];

    let resolver = EscalationResolver::new(attendance_catalog());
    let rec = resolver.resolve(&CategoryId::new("attendance"), &history, now);

    assert_eq!(rec.suggested_level, WarningLevel::FirstWritten);
    assert!(rec.is_escalation);
    assert_eq!(rec.category_warning_count, 1);
    assert_eq!(rec.active_warnings.len(), 1);
}

#[test]
fn lapsed_verbal_warning_resets_to_first_offense() {
    // The same verbal warning issued eight months ago has lapsed; the
    // recommendation starts over at counselling.
    let now = Utc.with_ymd_and_hms(2024, 8, 1, 9, 0, 0).unwrap();
    let issued = Utc.with_ymd_and_hms(2023, 12, 1, 9, 0, 0).unwrap();
    let history = vec![warning_issued_at(issued, WarningLevel::Verbal)];

    assert!(history[0].has_lapsed(now));

    let resolver = EscalationResolver::new(attendance_catalog());
    let rec = resolver.resolve(&CategoryId::new("attendance"), &history, now);

    assert_eq!(rec.suggested_level, WarningLevel::Counselling);
    assert!(!rec.is_escalation);
    assert_eq!(rec.category_warning_count, 0);
}

#[test]
fn repeated_offenses_walk_the_whole_path() {
    let resolver = EscalationResolver::new(attendance_catalog());
    let category = CategoryId::new("attendance");
    let start = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();

    let mut history: Vec<Warning> = Vec::new();
    let mut expected = vec![
        WarningLevel::Counselling,
        WarningLevel::Verbal,
        WarningLevel::FirstWritten,
        WarningLevel::FinalWritten,
        // Clamped: the path terminates rather than inventing a next level
        WarningLevel::FinalWritten,
    ];

    for (offense, expected_level) in expected.drain(..).enumerate() {
        // Monthly incidents, all within each warning's validity window
        let now = start + Duration::days(30 * offense as i64);
        let rec = resolver.resolve(&category, &history, now);
        assert_eq!(rec.suggested_level, expected_level, "offense {}", offense);
        history.push(warning_issued_at(now, rec.suggested_level));
    }
}

#[test]
fn expiry_is_calendar_exact() {
    // Leap-year February clamps; ordinary additions preserve the day.
    let jan31 = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
    let expiry = expiry_date(jan31, ValidityPeriod::ThreeMonths);
    assert_eq!(expiry, Utc.with_ymd_and_hms(2024, 4, 30, 0, 0, 0).unwrap());

    let mar15 = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
    assert_eq!(
        expiry_date(mar15, ValidityPeriod::SixMonths),
        Utc.with_ymd_and_hms(2024, 9, 15, 0, 0, 0).unwrap()
    );
}

#[test]
fn days_remaining_tracks_the_calendar() {
    let issue = Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 9, 10, 9, 0, 0).unwrap();
    assert_eq!(days_until_expiry(issue, ValidityPeriod::SixMonths, now), 5);

    let after = Utc.with_ymd_and_hms(2024, 9, 20, 9, 0, 0).unwrap();
    assert_eq!(
        days_until_expiry(issue, ValidityPeriod::SixMonths, after),
        -5
    );
}

#[test]
fn review_in_three_days_is_pending_with_countdown() {
    let now = Utc.with_ymd_and_hms(2024, 8, 1, 9, 0, 0).unwrap();
    let review_date = (now + Duration::days(3)).date_naive();

    let state = review_follow_up(Some(review_date), None, now, &ReviewPolicy::default());
    assert_eq!(
        state,
        ReviewFollowUp::Pending {
            days_until_review: Some(3)
        }
    );
    assert!(state.due_within(7));
}

#[test]
fn recorded_outcome_freezes_the_follow_up() {
    // Once an outcome exists the state stays completed no matter how far
    // past the review date the clock moves.
    let review_date = chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let policy = ReviewPolicy::default();

    for days_later in [0i64, 3, 40, 400] {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap() + Duration::days(days_later);
        let state = review_follow_up(
            Some(review_date),
            Some(ReviewOutcome::SomeConcerns),
            now,
            &policy,
        );
        assert_eq!(
            state,
            ReviewFollowUp::Completed {
                outcome: ReviewOutcome::SomeConcerns
            }
        );
    }
}

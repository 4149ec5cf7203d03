//! Validity and expiry arithmetic
//!
//! Expiry is exact calendar-month arithmetic, not a day-count
//! approximation: adding months preserves the day-of-month where possible
//! and clamps to the last valid day otherwise. All arithmetic is performed
//! in UTC; storage adapters normalize other representations on ingest.

use chrono::{DateTime, Months, NaiveDate, Utc};
use conduct_types::{ValidityPeriod, Warning};

const SECONDS_PER_DAY: i64 = 86_400;

/// Add calendar months to a date, clamping to the end of shorter months
pub fn add_calendar_months(date: NaiveDate, months: u32) -> NaiveDate {
    date + Months::new(months)
}

/// The instant a warning issued at `issue` stops counting toward escalation
pub fn expiry_date(issue: DateTime<Utc>, period: ValidityPeriod) -> DateTime<Utc> {
    issue + Months::new(period.months())
}

/// Is the warning counted toward escalation at `now`?
pub fn is_active(warning: &Warning, now: DateTime<Utc>) -> bool {
    warning.is_active(now)
}

/// Whole days until expiry, rounded up; negative once expired
pub fn days_until_expiry(
    issue: DateTime<Utc>,
    period: ValidityPeriod,
    now: DateTime<Utc>,
) -> i64 {
    let remaining = expiry_date(issue, period) - now;
    (remaining.num_seconds() + SECONDS_PER_DAY - 1).div_euclid(SECONDS_PER_DAY)
}

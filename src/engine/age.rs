// ==========================================
// Livestock Manager - age computation
// ==========================================
// Months are fixed 30-day blocks, never calendar months
// ==========================================

use crate::domain::projection::AnimalAge;
use chrono::{Duration, NaiveDate};

/// Days per projection month.
pub const DAYS_PER_MONTH: i64 = 30;

/// Age on `today`; `None` when the birth date is unknown.
///
/// Birth dates after `today` produce negative ages (floor division).
pub fn compute_ages(birth_date: Option<NaiveDate>, today: NaiveDate) -> Option<AnimalAge> {
    let birth = birth_date?;
    let days = (today - birth).num_days();
    Some(AnimalAge {
        days,
        months: days.div_euclid(DAYS_PER_MONTH),
    })
}

/// Whole 30-day months between birth and `date`.
pub fn months_between(birth: NaiveDate, date: NaiveDate) -> i64 {
    (date - birth).num_days().div_euclid(DAYS_PER_MONTH)
}

/// `base + days`, saturating at the calendar bounds.
pub fn add_days(base: NaiveDate, days: i64) -> NaiveDate {
    base.checked_add_signed(Duration::days(days))
        .unwrap_or(if days >= 0 { NaiveDate::MAX } else { NaiveDate::MIN })
}

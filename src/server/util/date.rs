//! UTC day and year boundaries used for date range filters.
//!
//! Timestamps are compared as half-open ranges `[start, end)` so that an inclusive
//! end day covers every instant up to `23:59:59.999`.

use chrono::{DateTime, Days, NaiveDate, Utc};

/// Midnight UTC at the start of `date`.
pub fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// Midnight UTC at the start of the day after `date`.
pub fn day_end_exclusive(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.checked_add_days(Days::new(1)).map(day_start)
}

/// `[Jan 1 of year, Jan 1 of year + 1)` in UTC, or `None` outside chrono's range.
pub fn year_range(year: i32) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let end = NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?;

    Some((day_start(start), day_start(end)))
}

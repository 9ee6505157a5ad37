//! Comparing a date key's period against "now".
//!
//! A key is *current* at a resolution when re-encoding it at that
//! resolution lands on the same key as today's date projected to that
//! resolution. This is a thin composition over
//! [`convert_date_key`](crate::convert::convert_date_key) and
//! [`format_date_as_key`](crate::convert::format_date_as_key), so the
//! coarsening/refinement semantics carry over: `is_current_month` on a day
//! key asks whether the day falls in the current month, and on a year key
//! whether January of that year is the current month.
//!
//! The comparators return plain booleans; a key that cannot be parsed is
//! simply not current. Each clock-reading function has a `*_with_now` twin
//! taking an explicit reference date.

use chrono::{Local, NaiveDate};

use crate::convert::{convert_date_key, format_date_as_key, get_date_key_type};
use crate::key::Resolution;

fn is_current_at(key: &str, resolution: Resolution, today: NaiveDate) -> bool {
    match convert_date_key(key, resolution) {
        Ok(converted) => converted == format_date_as_key(today, resolution),
        Err(_) => false,
    }
}

/// Whether the key's period, refined or coarsened to a day, is today.
pub fn is_current_day(key: &str) -> bool {
    is_current_day_with_now(key, Local::now().date_naive())
}

/// [`is_current_day`] against an explicit reference date.
pub fn is_current_day_with_now(key: &str, today: NaiveDate) -> bool {
    is_current_at(key, Resolution::Day, today)
}

/// Whether the key's period, at week resolution, is the current week.
pub fn is_current_week(key: &str) -> bool {
    is_current_week_with_now(key, Local::now().date_naive())
}

/// [`is_current_week`] against an explicit reference date.
pub fn is_current_week_with_now(key: &str, today: NaiveDate) -> bool {
    is_current_at(key, Resolution::Week, today)
}

/// Whether the key's period, at month resolution, is the current month.
pub fn is_current_month(key: &str) -> bool {
    is_current_month_with_now(key, Local::now().date_naive())
}

/// [`is_current_month`] against an explicit reference date.
pub fn is_current_month_with_now(key: &str, today: NaiveDate) -> bool {
    is_current_at(key, Resolution::Month, today)
}

/// Whether the key's period, at year resolution, is the current year.
pub fn is_current_year(key: &str) -> bool {
    is_current_year_with_now(key, Local::now().date_naive())
}

/// [`is_current_year`] against an explicit reference date.
pub fn is_current_year_with_now(key: &str, today: NaiveDate) -> bool {
    is_current_at(key, Resolution::Year, today)
}

/// Whether the key names the current period.
///
/// With `period` given, compares at that resolution; otherwise uses the
/// key's own detected resolution. A key with no detectable resolution is
/// not current rather than an error.
pub fn is_current_period(key: &str, period: Option<Resolution>) -> bool {
    is_current_period_with_now(key, period, Local::now().date_naive())
}

/// [`is_current_period`] against an explicit reference date.
pub fn is_current_period_with_now(key: &str, period: Option<Resolution>, today: NaiveDate) -> bool {
    let resolution = match period.or_else(|| get_date_key_type(key).ok()) {
        Some(resolution) => resolution,
        None => return false,
    };
    is_current_at(key, resolution, today)
}

// ── Tests ───────────────────────────────────────────────────────────────────

//! Date key shapes: validators and builders.
//!
//! A *date key* is a plain string naming a calendar period at one of four
//! resolutions. Resolution is carried entirely by the string's shape — the
//! four shapes are syntactically disjoint, so any string matches at most
//! one of them:
//!
//! | Resolution | Shape        | Example      |
//! |------------|--------------|--------------|
//! | year       | `YYYY`       | `2024`       |
//! | month      | `YYYY-MM`    | `2024-01`    |
//! | week       | `YYYY-Www`   | `2024-W01`   |
//! | day        | `YYYY-MM-DD` | `2024-01-15` |
//!
//! Validators check shape only. A month of `13` or a day of `32` passes the
//! shape check; only [`crate::convert::parse_date_key`] rejects values that
//! do not name a real calendar date.

use serde::Serialize;

/// The granularity a date key denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Resolution {
    /// A calendar day (`YYYY-MM-DD`).
    Day,
    /// A week of a week-numbering year (`YYYY-Www`).
    Week,
    /// A calendar month (`YYYY-MM`).
    Month,
    /// A calendar year (`YYYY`).
    Year,
}

fn all_digits(bytes: &[u8]) -> bool {
    !bytes.is_empty() && bytes.iter().all(u8::is_ascii_digit)
}

/// Whether `key` has the day-key shape `YYYY-MM-DD`.
pub fn is_day_key(key: &str) -> bool {
    let b = key.as_bytes();
    b.len() == 10
        && all_digits(&b[0..4])
        && b[4] == b'-'
        && all_digits(&b[5..7])
        && b[7] == b'-'
        && all_digits(&b[8..10])
}

/// Whether `key` has the week-key shape `YYYY-Www`.
pub fn is_week_key(key: &str) -> bool {
    let b = key.as_bytes();
    b.len() == 8 && all_digits(&b[0..4]) && b[4] == b'-' && b[5] == b'W' && all_digits(&b[6..8])
}

/// Whether `key` has the month-key shape `YYYY-MM`.
pub fn is_month_key(key: &str) -> bool {
    let b = key.as_bytes();
    b.len() == 7 && all_digits(&b[0..4]) && b[4] == b'-' && all_digits(&b[5..7])
}

/// Whether `key` has the year-key shape `YYYY`.
pub fn is_year_key(key: &str) -> bool {
    all_digits(key.as_bytes()) && key.len() == 4
}

/// Build a day key from numeric components.
///
/// Month and day are zero-padded to two digits; the year is emitted as-is.
/// No range validation is performed — a caller supplying a month of 13
/// gets `"2024-13-01"` back, which the validators still accept as a day
/// *shape*. Supplying a year or sub-year field with more digits than the
/// shape allows is a precondition violation: the result will simply fail
/// [`is_day_key`].
pub fn to_day_key(year: i32, month: u32, day: u32) -> String {
    format!("{year}-{month:02}-{day:02}")
}

/// Build a week key from a week-numbering year and a 1-based week index.
pub fn to_week_key(year: i32, week: u32) -> String {
    format!("{year}-W{week:02}")
}

/// Build a month key from numeric components (1-based month).
pub fn to_month_key(year: i32, month: u32) -> String {
    format!("{year}-{month:02}")
}

/// Build a year key.
pub fn to_year_key(year: i32) -> String {
    format!("{year}")
}

// ── Tests ───────────────────────────────────────────────────────────────────

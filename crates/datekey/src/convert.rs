//! Bidirectional conversion between calendar dates and date keys.
//!
//! The conversions are *lossy by design*: projecting a date down to a week,
//! month, or year key discards the finer components, and parsing a coarse
//! key back yields the first day of the period it names — not whatever date
//! originally produced it. [`convert_date_key`] composes the two, so
//! converting a day key to a month key drops the day, and converting a
//! month key to a day key fabricates day 1. That asymmetry is the contract,
//! not an accident.
//!
//! # Week numbering
//!
//! Week keys use a Sunday-start week and the majority-of-days ownership
//! rule: a week belongs to whichever calendar year contains at least four
//! of its seven days, which is the year of the week's middle day (its
//! Wednesday). Week 1 of a week-numbering year is the week containing the
//! first day assigned to that year — its Sunday is the one falling on or
//! before January 4. Counting forward from week 1 partitions the calendar
//! continuum with no gaps or overlaps, so the key a date maps to does not
//! depend on which day inside the week is asked. This is the one place a
//! key's embedded year can differ from the calendar year of a day inside
//! it: December 31 2023 lives in `2024-W01`.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::error::{DateKeyError, Result};
use crate::key::{
    is_day_key, is_month_key, is_week_key, is_year_key, to_day_key, to_month_key, to_week_key,
    to_year_key, Resolution,
};

/// The numeric fields of a date key, one record for all four shapes.
///
/// Only the fields meaningful for `resolution` are populated: a month key
/// has `year` and `month`, a week key has `year` (the week-numbering year)
/// and `week`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateKeyParts {
    /// The key's resolution, as detected from its shape.
    pub resolution: Resolution,
    /// Calendar year, or the week-numbering year for a week key.
    pub year: i32,
    /// 1-based calendar month (day and month keys).
    pub month: Option<u32>,
    /// Day of month (day keys).
    pub day: Option<u32>,
    /// 1-based week index within the week-numbering year (week keys).
    pub week: Option<u32>,
}

fn invalid(key: &str) -> DateKeyError {
    DateKeyError::InvalidKey(key.to_string())
}

/// Parse a run of ASCII digits. Callers must have shape-checked the slice.
fn digits(s: &str) -> u32 {
    s.bytes().fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

// ── Week numbering ──────────────────────────────────────────────────────────

/// The Sunday on or before `date`.
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// The Sunday starting week 1 of `week_year`: the one on or before Jan 4,
/// which puts the majority of that week's days inside `week_year`.
fn week_one_start(week_year: i32) -> NaiveDate {
    let jan4 = NaiveDate::from_ymd_opt(week_year, 1, 4).unwrap_or(NaiveDate::MIN);
    week_start(jan4)
}

// ── Date → key projections ──────────────────────────────────────────────────

/// Project a date to its day key.
pub fn date_to_day_key(date: NaiveDate) -> String {
    to_day_key(date.year(), date.month(), date.day())
}

/// Project a date to the key of the week containing it.
///
/// The embedded year is the *week-numbering* year, which near January 1 may
/// differ from `date.year()` — see the module docs for the ownership rule.
pub fn date_to_week_key(date: NaiveDate) -> String {
    let start = week_start(date);
    let week_year = (start + Duration::days(3)).year();
    let week = (start - week_one_start(week_year)).num_days() / 7 + 1;
    to_week_key(week_year, week as u32)
}

/// Project a date to its month key.
pub fn date_to_month_key(date: NaiveDate) -> String {
    to_month_key(date.year(), date.month())
}

/// Project a date to its year key.
pub fn date_to_year_key(date: NaiveDate) -> String {
    to_year_key(date.year())
}

/// Project a date down to the key of the requested resolution.
pub fn format_date_as_key(date: NaiveDate, resolution: Resolution) -> String {
    match resolution {
        Resolution::Day => date_to_day_key(date),
        Resolution::Week => date_to_week_key(date),
        Resolution::Month => date_to_month_key(date),
        Resolution::Year => date_to_year_key(date),
    }
}

// ── Key → fields parsers ────────────────────────────────────────────────────

/// Split a day key into `(year, month, day)`.
///
/// Token split only — `"2024-13-40"` parses to `(2024, 13, 40)`. Use
/// [`parse_date_key`] when the fields must name a real calendar date.
///
/// # Errors
///
/// Returns [`DateKeyError::InvalidKey`] if `key` is not day-shaped.
pub fn parse_day_key(key: &str) -> Result<(i32, u32, u32)> {
    if !is_day_key(key) {
        return Err(invalid(key));
    }
    Ok((
        digits(&key[0..4]) as i32,
        digits(&key[5..7]),
        digits(&key[8..10]),
    ))
}

/// Split a week key into `(week_year, week)`.
///
/// # Errors
///
/// Returns [`DateKeyError::InvalidKey`] if `key` is not week-shaped.
pub fn parse_week_key(key: &str) -> Result<(i32, u32)> {
    if !is_week_key(key) {
        return Err(invalid(key));
    }
    Ok((digits(&key[0..4]) as i32, digits(&key[6..8])))
}

/// Split a month key into `(year, month)`.
///
/// # Errors
///
/// Returns [`DateKeyError::InvalidKey`] if `key` is not month-shaped.
pub fn parse_month_key(key: &str) -> Result<(i32, u32)> {
    if !is_month_key(key) {
        return Err(invalid(key));
    }
    Ok((digits(&key[0..4]) as i32, digits(&key[5..7])))
}

/// Parse a year key into its year.
///
/// # Errors
///
/// Returns [`DateKeyError::InvalidKey`] if `key` is not year-shaped.
pub fn parse_year_key(key: &str) -> Result<i32> {
    if !is_year_key(key) {
        return Err(invalid(key));
    }
    Ok(digits(key) as i32)
}

// ── Key → date / type dispatch ──────────────────────────────────────────────

/// Detect the resolution a key denotes from its shape.
///
/// # Errors
///
/// Returns [`DateKeyError::InvalidKey`] if no shape matches.
pub fn get_date_key_type(key: &str) -> Result<Resolution> {
    if is_day_key(key) {
        Ok(Resolution::Day)
    } else if is_week_key(key) {
        Ok(Resolution::Week)
    } else if is_month_key(key) {
        Ok(Resolution::Month)
    } else if is_year_key(key) {
        Ok(Resolution::Year)
    } else {
        Err(invalid(key))
    }
}

/// Parse a key into the first day of the period it names.
///
/// Day key → that day; week key → the Sunday starting the week; month key
/// → the 1st; year key → January 1.
///
/// # Errors
///
/// Returns [`DateKeyError::InvalidKey`] if the string matches none of the
/// four shapes, or if its fields do not form a real calendar date (e.g.
/// `"2024-13-40"`).
pub fn parse_date_key(key: &str) -> Result<NaiveDate> {
    match get_date_key_type(key)? {
        Resolution::Day => {
            let (year, month, day) = parse_day_key(key)?;
            NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| invalid(key))
        }
        Resolution::Week => {
            let (week_year, week) = parse_week_key(key)?;
            Ok(week_one_start(week_year) + Duration::weeks(i64::from(week) - 1))
        }
        Resolution::Month => {
            let (year, month) = parse_month_key(key)?;
            NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| invalid(key))
        }
        Resolution::Year => {
            let year = parse_year_key(key)?;
            NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| invalid(key))
        }
    }
}

/// Parse a key into its numeric fields, dispatching on detected shape.
///
/// # Errors
///
/// Returns [`DateKeyError::InvalidKey`] if no shape matches.
pub fn parse_date_key_to_parts(key: &str) -> Result<DateKeyParts> {
    match get_date_key_type(key)? {
        Resolution::Day => {
            let (year, month, day) = parse_day_key(key)?;
            Ok(DateKeyParts {
                resolution: Resolution::Day,
                year,
                month: Some(month),
                day: Some(day),
                week: None,
            })
        }
        Resolution::Week => {
            let (year, week) = parse_week_key(key)?;
            Ok(DateKeyParts {
                resolution: Resolution::Week,
                year,
                month: None,
                day: None,
                week: Some(week),
            })
        }
        Resolution::Month => {
            let (year, month) = parse_month_key(key)?;
            Ok(DateKeyParts {
                resolution: Resolution::Month,
                year,
                month: Some(month),
                day: None,
                week: None,
            })
        }
        Resolution::Year => {
            let year = parse_year_key(key)?;
            Ok(DateKeyParts {
                resolution: Resolution::Year,
                year,
                month: None,
                day: None,
                week: None,
            })
        }
    }
}

/// Re-encode a key at a different resolution.
///
/// Coarsening discards information (day → month forgets the day);
/// refinement fabricates the period start (month → day yields day 1, year
/// → week yields week 1). Converting a key to its own resolution is the
/// identity.
///
/// # Errors
///
/// Returns [`DateKeyError::InvalidKey`] if `key` fails [`parse_date_key`].
pub fn convert_date_key(key: &str, target: Resolution) -> Result<String> {
    Ok(format_date_as_key(parse_date_key(key)?, target))
}

// ── Tests ───────────────────────────────────────────────────────────────────

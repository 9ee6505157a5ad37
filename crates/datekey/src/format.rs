//! Human-friendly rendering of date keys and key ranges.
//!
//! The formatter never fails: a string that matches none of the four key
//! shapes (or whose fields do not name a real calendar date) is echoed back
//! unchanged, treated as an already-final display string.
//!
//! Week keys are always *displayed* as their Sunday–Saturday day span,
//! never as `Www`. Ranges elide components shared by both endpoints
//! (`January 15 – 20, 2024`), and the `omit_current` option suppresses
//! the year and/or month of a single key when they match today's.
//!
//! "Today" is read from the local clock once per top-level call. Every
//! clock-reading entry point has a `*_with_now` twin taking an explicit
//! reference date, which is what tests use ([`format_friendly_date`] /
//! [`format_friendly_date_with_now`]).

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::Serialize;

use crate::convert::parse_date_key;
use crate::key::{is_day_key, is_month_key, is_week_key, is_year_key, Resolution};

const RANGE_SEPARATOR: &str = " – ";

/// When to suppress key components that match the current date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum OmitCurrent {
    /// Never omit anything.
    #[default]
    Never,
    /// Resolution-dependent: behaves as [`OmitCurrent::Year`] for a month
    /// key and as [`OmitCurrent::Month`] for a day key.
    Auto,
    /// Omit the year when it matches today's, regardless of month.
    Year,
    /// Omit month *and* year when both match today's. Omission cascades:
    /// the month cannot be dropped while keeping the coarser year. When
    /// only the year matches, this degrades to year omission.
    Month,
}

/// Overall verbosity of the rendered date, mirroring the four classic
/// locale date styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DateStyle {
    /// Weekday, full month name, day, year (`Saturday, June 15, 2024`).
    Full,
    /// Full month name, day, year (`June 15, 2024`).
    #[default]
    Long,
    /// Abbreviated month name, day, year (`Jun 15, 2024`).
    Medium,
    /// Numeric month/day/year (`6/15/24`).
    Short,
}

/// Options for the friendly formatter.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// When to suppress components matching the current date.
    pub omit_current: OmitCurrent,
    /// Verbosity of the rendered date.
    pub date_style: DateStyle,
}

/// Render a single date key as a human-readable string.
///
/// Reads today's date from the local clock; see
/// [`format_friendly_date_with_now`] for an injectable reference date.
///
/// # Examples
///
/// ```
/// use datekey::{format_friendly_date, FormatOptions};
///
/// let options = FormatOptions::default();
/// assert_eq!(format_friendly_date("2024-01-15", &options), "January 15, 2024");
/// assert_eq!(format_friendly_date("2024-01", &options), "January 2024");
/// assert_eq!(format_friendly_date("2024", &options), "2024");
/// ```
pub fn format_friendly_date(key: &str, options: &FormatOptions) -> String {
    format_friendly_date_with_now(key, options, Local::now().date_naive())
}

/// Render a single date key against an explicit "today".
pub fn format_friendly_date_with_now(
    key: &str,
    options: &FormatOptions,
    today: NaiveDate,
) -> String {
    format_single(key, options, today)
}

/// Render an inclusive range of two date keys.
///
/// Equal endpoints collapse to the single-key rendering. Distinct
/// endpoints of the same resolution get range-aware rendering with
/// redundancy elision; anything else (mixed resolutions, year ranges,
/// endpoints that fail calendar validation) falls back to formatting each
/// endpoint independently, joined with an en-dash.
pub fn format_friendly_date_range(start: &str, end: &str, options: &FormatOptions) -> String {
    format_friendly_date_range_with_now(start, end, options, Local::now().date_naive())
}

/// Render an inclusive key range against an explicit "today".
pub fn format_friendly_date_range_with_now(
    start: &str,
    end: &str,
    options: &FormatOptions,
    today: NaiveDate,
) -> String {
    if start == end {
        return format_single(start, options, today);
    }

    // A week range is a day range over the weeks' outer bounds
    if is_week_key(start) && is_week_key(end) {
        if let (Ok(s), Ok(e)) = (parse_date_key(start), parse_date_key(end)) {
            return format_day_range(s, e + Duration::days(6), options.date_style);
        }
    }

    if is_day_key(start) && is_day_key(end) {
        if let (Ok(s), Ok(e)) = (parse_date_key(start), parse_date_key(end)) {
            return format_day_range(s, e, options.date_style);
        }
    }

    if is_month_key(start) && is_month_key(end) {
        if let (Ok(s), Ok(e)) = (parse_date_key(start), parse_date_key(end)) {
            return format_month_range(s, e, options.date_style);
        }
    }

    format!(
        "{}{RANGE_SEPARATOR}{}",
        format_single(start, options, today),
        format_single(end, options, today)
    )
}

// ── Single-key dispatch ─────────────────────────────────────────────────────

fn format_single(key: &str, options: &FormatOptions, today: NaiveDate) -> String {
    if is_week_key(key) {
        if let Ok(start) = parse_date_key(key) {
            return format_day_range(start, start + Duration::days(6), options.date_style);
        }
    } else if is_day_key(key) {
        if let Ok(date) = parse_date_key(key) {
            return format_single_day(date, options, today);
        }
    } else if is_month_key(key) {
        if let Ok(first) = parse_date_key(key) {
            return format_single_month(first, options, today);
        }
    } else if is_year_key(key) {
        return key.to_string();
    }
    // Unrecognized shape or unformattable fields: already-final display text
    key.to_string()
}

/// Resolve [`OmitCurrent::Auto`] against the target resolution.
fn effective_omission(omit: OmitCurrent, resolution: Resolution) -> OmitCurrent {
    match (omit, resolution) {
        (OmitCurrent::Auto, Resolution::Day) => OmitCurrent::Month,
        (OmitCurrent::Auto, _) => OmitCurrent::Year,
        (other, _) => other,
    }
}

fn format_single_day(date: NaiveDate, options: &FormatOptions, today: NaiveDate) -> String {
    let omit = effective_omission(options.omit_current, Resolution::Day);
    let same_year = date.year() == today.year();
    let same_month = same_year && date.month() == today.month();

    if omit == OmitCurrent::Month && same_month {
        return date.format("%-d").to_string();
    }

    let omit_year = matches!(omit, OmitCurrent::Month | OmitCurrent::Year) && same_year;
    let fmt = match (options.date_style, omit_year) {
        (DateStyle::Full, false) => "%A, %B %-d, %Y",
        (DateStyle::Full, true) => "%A, %B %-d",
        (DateStyle::Long, false) => "%B %-d, %Y",
        (DateStyle::Long, true) => "%B %-d",
        (DateStyle::Medium, false) => "%b %-d, %Y",
        (DateStyle::Medium, true) => "%b %-d",
        (DateStyle::Short, false) => "%-m/%-d/%y",
        (DateStyle::Short, true) => "%-m/%-d",
    };
    date.format(fmt).to_string()
}

/// `first` is the first day of the month being rendered.
fn format_single_month(first: NaiveDate, options: &FormatOptions, today: NaiveDate) -> String {
    let omit = effective_omission(options.omit_current, Resolution::Month);
    let omit_year = omit != OmitCurrent::Never && first.year() == today.year();
    let fmt = match (options.date_style, omit_year) {
        (DateStyle::Full | DateStyle::Long, false) => "%B %Y",
        (DateStyle::Full | DateStyle::Long, true) => "%B",
        (DateStyle::Medium, false) => "%b %Y",
        (DateStyle::Medium, true) => "%b",
        (DateStyle::Short, false) => "%-m/%Y",
        (DateStyle::Short, true) => "%-m",
    };
    first.format(fmt).to_string()
}

// ── Range rendering ─────────────────────────────────────────────────────────

fn format_day_range(start: NaiveDate, end: NaiveDate, style: DateStyle) -> String {
    // Numeric style gets no elision: both endpoints in full
    if style == DateStyle::Short {
        return format!(
            "{}{RANGE_SEPARATOR}{}",
            start.format("%-m/%-d/%y"),
            end.format("%-m/%-d/%y")
        );
    }

    let same_year = start.year() == end.year();
    let same_month = same_year && start.month() == end.month();

    if style == DateStyle::Full {
        // Weekdays differ between endpoints, so the month is repeated even
        // within a single month; only the year can be shared.
        return if same_year {
            format!(
                "{}{RANGE_SEPARATOR}{}, {}",
                start.format("%A, %B %-d"),
                end.format("%A, %B %-d"),
                end.format("%Y")
            )
        } else {
            format!(
                "{}{RANGE_SEPARATOR}{}",
                start.format("%A, %B %-d, %Y"),
                end.format("%A, %B %-d, %Y")
            )
        };
    }

    let md = if style == DateStyle::Long { "%B %-d" } else { "%b %-d" };
    if same_month {
        format!(
            "{}{RANGE_SEPARATOR}{}, {}",
            start.format(md),
            end.format("%-d"),
            end.format("%Y")
        )
    } else if same_year {
        format!(
            "{}{RANGE_SEPARATOR}{}, {}",
            start.format(md),
            end.format(md),
            end.format("%Y")
        )
    } else {
        let mdy = if style == DateStyle::Long { "%B %-d, %Y" } else { "%b %-d, %Y" };
        format!(
            "{}{RANGE_SEPARATOR}{}",
            start.format(mdy),
            end.format(mdy)
        )
    }
}

/// Both inputs are first-of-month dates.
fn format_month_range(start: NaiveDate, end: NaiveDate, style: DateStyle) -> String {
    let (name, with_year) = match style {
        DateStyle::Full | DateStyle::Long => ("%B", "%B %Y"),
        DateStyle::Medium => ("%b", "%b %Y"),
        DateStyle::Short => ("%-m/%Y", "%-m/%Y"),
    };
    if style != DateStyle::Short && start.year() == end.year() {
        format!(
            "{}{RANGE_SEPARATOR}{}",
            start.format(name),
            end.format(with_year)
        )
    } else {
        format!(
            "{}{RANGE_SEPARATOR}{}",
            start.format(with_year),
            end.format(with_year)
        )
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::to_day_key;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Frozen "today" for all clock-dependent tests.
    fn today() -> NaiveDate {
        date(2026, 6, 17)
    }

    fn fmt(key: &str, options: &FormatOptions) -> String {
        format_friendly_date_with_now(key, options, today())
    }

    fn fmt_range(start: &str, end: &str, options: &FormatOptions) -> String {
        format_friendly_date_range_with_now(start, end, options, today())
    }

    fn style(date_style: DateStyle) -> FormatOptions {
        FormatOptions {
            date_style,
            ..Default::default()
        }
    }

    fn omit(omit_current: OmitCurrent) -> FormatOptions {
        FormatOptions {
            omit_current,
            ..Default::default()
        }
    }

    // ── single keys ─────────────────────────────────────────────────────

    #[test]
    fn test_single_day_default_style() {
        assert_eq!(fmt("2024-01-15", &FormatOptions::default()), "January 15, 2024");
    }

    #[test]
    fn test_single_month() {
        assert_eq!(fmt("2024-01", &FormatOptions::default()), "January 2024");
        assert_eq!(fmt("2024-01", &style(DateStyle::Medium)), "Jan 2024");
        assert_eq!(fmt("2024-01", &style(DateStyle::Short)), "1/2024");
    }

    #[test]
    fn test_single_year_ignores_options() {
        assert_eq!(fmt("2024", &FormatOptions::default()), "2024");
        assert_eq!(fmt("2024", &style(DateStyle::Short)), "2024");
        assert_eq!(fmt("2026", &omit(OmitCurrent::Auto)), "2026");
    }

    #[test]
    fn test_single_week_renders_as_day_span() {
        // Week 3 of 2024 runs Sunday Jan 14 – Saturday Jan 20
        assert_eq!(fmt("2024-W03", &FormatOptions::default()), "January 14 – 20, 2024");
    }

    #[test]
    fn test_single_week_straddling_years() {
        // Week 1 of 2024 runs Dec 31 2023 – Jan 6 2024
        assert_eq!(
            fmt("2024-W01", &FormatOptions::default()),
            "December 31, 2023 – January 6, 2024"
        );
    }

    #[test]
    fn test_unrecognized_shape_echoed() {
        assert_eq!(fmt("hello", &FormatOptions::default()), "hello");
        assert_eq!(fmt("2024-1-5", &FormatOptions::default()), "2024-1-5");
        assert_eq!(fmt("", &FormatOptions::default()), "");
    }

    #[test]
    fn test_unformattable_fields_echoed() {
        // Day shape but not a real calendar date
        assert_eq!(fmt("2024-13-40", &FormatOptions::default()), "2024-13-40");
        assert_eq!(fmt("2024-00", &FormatOptions::default()), "2024-00");
    }

    // ── date styles ─────────────────────────────────────────────────────

    #[test]
    fn test_day_style_full_includes_weekday() {
        assert_eq!(fmt("2024-06-15", &style(DateStyle::Full)), "Saturday, June 15, 2024");
    }

    #[test]
    fn test_day_style_medium_and_short() {
        assert_eq!(fmt("2024-06-15", &style(DateStyle::Medium)), "Jun 15, 2024");
        assert_eq!(fmt("2024-06-15", &style(DateStyle::Short)), "6/15/24");
    }

    // ── omit_current ────────────────────────────────────────────────────

    #[test]
    fn test_omit_auto_cascade_on_day_keys() {
        // Current month: day number only
        assert_eq!(fmt(&to_day_key(2026, 6, 17), &omit(OmitCurrent::Auto)), "17");
        // Current year, different month: month omission degrades to year omission
        assert_eq!(fmt(&to_day_key(2026, 2, 15), &omit(OmitCurrent::Auto)), "February 15");
        // Different year: nothing omitted
        assert_eq!(fmt(&to_day_key(2025, 6, 15), &omit(OmitCurrent::Auto)), "June 15, 2025");
    }

    #[test]
    fn test_omit_year_on_day_key_ignores_month() {
        assert_eq!(fmt(&to_day_key(2026, 2, 15), &omit(OmitCurrent::Year)), "February 15");
        // Year omission alone never drops the month, even in the current month
        assert_eq!(fmt(&to_day_key(2026, 6, 15), &omit(OmitCurrent::Year)), "June 15");
        assert_eq!(fmt(&to_day_key(2025, 2, 15), &omit(OmitCurrent::Year)), "February 15, 2025");
    }

    #[test]
    fn test_omit_month_requires_both_components_current() {
        assert_eq!(fmt(&to_day_key(2026, 6, 20), &omit(OmitCurrent::Month)), "20");
        assert_eq!(fmt(&to_day_key(2026, 2, 15), &omit(OmitCurrent::Month)), "February 15");
        assert_eq!(fmt(&to_day_key(2025, 2, 15), &omit(OmitCurrent::Month)), "February 15, 2025");
    }

    #[test]
    fn test_omit_on_month_keys() {
        assert_eq!(fmt("2026-03", &omit(OmitCurrent::Auto)), "March");
        assert_eq!(fmt("2026-03", &omit(OmitCurrent::Year)), "March");
        assert_eq!(fmt("2025-03", &omit(OmitCurrent::Auto)), "March 2025");
        assert_eq!(fmt("2026-03", &omit(OmitCurrent::Never)), "March 2026");
    }

    #[test]
    fn test_omit_year_with_short_style_is_numeric_month_day() {
        let options = FormatOptions {
            omit_current: OmitCurrent::Year,
            date_style: DateStyle::Short,
        };
        assert_eq!(fmt(&to_day_key(2026, 2, 15), &options), "2/15");
    }

    #[test]
    fn test_full_style_keeps_weekday_with_omitted_year() {
        let options = FormatOptions {
            omit_current: OmitCurrent::Year,
            date_style: DateStyle::Full,
        };
        // June 20 2026 is a Saturday
        assert_eq!(fmt(&to_day_key(2026, 6, 20), &options), "Saturday, June 20");
    }

    // ── ranges ──────────────────────────────────────────────────────────

    #[test]
    fn test_day_range_same_month_elides() {
        assert_eq!(
            fmt_range("2024-01-15", "2024-01-20", &FormatOptions::default()),
            "January 15 – 20, 2024"
        );
    }

    #[test]
    fn test_day_range_same_year_elides_year_only() {
        assert_eq!(
            fmt_range("2024-01-15", "2024-02-20", &FormatOptions::default()),
            "January 15 – February 20, 2024"
        );
    }

    #[test]
    fn test_day_range_across_years() {
        assert_eq!(
            fmt_range("2023-12-30", "2024-01-02", &FormatOptions::default()),
            "December 30, 2023 – January 2, 2024"
        );
    }

    #[test]
    fn test_day_range_full_style() {
        assert_eq!(
            fmt_range("2024-06-15", "2024-06-20", &style(DateStyle::Full)),
            "Saturday, June 15 – Thursday, June 20, 2024"
        );
    }

    #[test]
    fn test_day_range_short_style_no_elision() {
        assert_eq!(
            fmt_range("2024-01-15", "2024-01-20", &style(DateStyle::Short)),
            "1/15/24 – 1/20/24"
        );
    }

    #[test]
    fn test_week_range_expands_to_day_bounds() {
        // W01 starts Sunday Dec 31 2023; W02 ends Saturday Jan 13 2024
        assert_eq!(
            fmt_range("2024-W01", "2024-W02", &FormatOptions::default()),
            "December 31, 2023 – January 13, 2024"
        );
    }

    #[test]
    fn test_month_range_shares_year() {
        assert_eq!(
            fmt_range("2024-01", "2024-03", &FormatOptions::default()),
            "January – March 2024"
        );
        assert_eq!(
            fmt_range("2024-01", "2024-03", &style(DateStyle::Medium)),
            "Jan – Mar 2024"
        );
        assert_eq!(
            fmt_range("2024-01", "2024-03", &style(DateStyle::Short)),
            "1/2024 – 3/2024"
        );
    }

    #[test]
    fn test_month_range_across_years() {
        assert_eq!(
            fmt_range("2024-11", "2025-02", &FormatOptions::default()),
            "November 2024 – February 2025"
        );
    }

    #[test]
    fn test_year_range_falls_back_to_joined_singles() {
        assert_eq!(fmt_range("2023", "2024", &FormatOptions::default()), "2023 – 2024");
    }

    #[test]
    fn test_mixed_resolution_range_falls_back() {
        assert_eq!(
            fmt_range("2024-01", "2024-03-15", &FormatOptions::default()),
            "January 2024 – March 15, 2024"
        );
    }

    #[test]
    fn test_invalid_endpoints_fall_back_to_echo() {
        assert_eq!(
            fmt_range("2024-13-40", "2024-13-41", &FormatOptions::default()),
            "2024-13-40 – 2024-13-41"
        );
    }

    #[test]
    fn test_equal_endpoints_collapse_to_single() {
        assert_eq!(fmt_range("2024-01", "2024-01", &FormatOptions::default()), "January 2024");
        assert_eq!(
            fmt_range("2024-01-15", "2024-01-15", &FormatOptions::default()),
            "January 15, 2024"
        );
    }
}

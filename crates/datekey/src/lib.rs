//! # datekey
//!
//! Calendar period keys at four resolutions — day, week, month, year —
//! encoded as disjoint string shapes (`2024-01-15`, `2024-W01`, `2024-01`,
//! `2024`), with bidirectional date↔key conversion, Sunday-start
//! majority-rule week numbering, and human-friendly display formatting
//! with redundancy elision and "omit current period" logic.
//!
//! Everything is synchronous and pure: the only ambient input is the local
//! wall clock, and every function that reads it has a `*_with_now` twin
//! taking an explicit reference date so callers and tests can freeze time.
//!
//! ## Modules
//!
//! - [`key`] — shape validators, key builders, and the [`Resolution`] type
//! - [`convert`] — date↔key converters, week numbering, key parsers
//! - [`format`] — friendly single-key and range formatting
//! - [`current`] — "is this key the current period" comparators
//! - [`error`] — error types

pub mod convert;
pub mod current;
pub mod error;
pub mod format;
pub mod key;

pub use convert::{
    convert_date_key, date_to_day_key, date_to_month_key, date_to_week_key, date_to_year_key,
    format_date_as_key, get_date_key_type, parse_date_key, parse_date_key_to_parts, parse_day_key,
    parse_month_key, parse_week_key, parse_year_key, DateKeyParts,
};
pub use current::{
    is_current_day, is_current_day_with_now, is_current_month, is_current_month_with_now,
    is_current_period, is_current_period_with_now, is_current_week, is_current_week_with_now,
    is_current_year, is_current_year_with_now,
};
pub use error::DateKeyError;
pub use format::{
    format_friendly_date, format_friendly_date_range, format_friendly_date_range_with_now,
    format_friendly_date_with_now, DateStyle, FormatOptions, OmitCurrent,
};
pub use key::{
    is_day_key, is_month_key, is_week_key, is_year_key, to_day_key, to_month_key, to_week_key,
    to_year_key, Resolution,
};

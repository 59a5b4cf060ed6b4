//! Structural validators for API response entities.
//!
//! Pure pass/fail checks over the fields of one returned entity: required
//! strings non-empty, ids positive, counts and prices non-negative, totals
//! at least the base, timestamps parseable, nested collections validated by
//! recursive application. Failures carry a descriptive message and travel
//! the scenario's reject path.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub mod headless;
pub mod plugin;

/// Accepts the timestamp layouts the platform emits: RFC 3339, a bare
/// `Y-m-d H:M:S`, or a date-only value.
pub(crate) fn parses_as_timestamp(value: &str) -> bool {
    DateTime::parse_from_rfc3339(value).is_ok()
        || NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").is_ok()
        || NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

//! Lenient ISO date parsing for form input.
//!
//! Browser date inputs submit `YYYY-MM-DD` or an empty string. Anything
//! that is not a valid calendar date in that format is treated as absent,
//! never as an error, so a bad date can only ever downgrade a field to
//! "not recorded".

use chrono::NaiveDate;

/// Parse an ISO `YYYY-MM-DD` string, yielding `None` for empty or
/// malformed input.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

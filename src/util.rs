use crate::error::{GitcalError, Result};
use chrono::{Datelike, NaiveDate};

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn month_label(date: &NaiveDate) -> &'static str {
    MONTH_LABELS[date.month0() as usize]
}

/// Strict `YYYY-MM-DD`; chrono alone would also accept `2024-6-1`.
pub fn parse_short_date(input: &str) -> Result<NaiveDate> {
    if input.len() != 10 {
        return Err(GitcalError::InvalidDate(format!("expected YYYY-MM-DD, got '{input}'")));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|e| GitcalError::InvalidDate(format!("'{input}': {e}")))
}

//! Parsing calendar dates from user input.
//!
//! Dates stay `NaiveDate` from the moment they are parsed. Nothing here goes
//! through a timestamp, so a YYYY-MM-DD string can never shift a day when the
//! local timezone is behind UTC.

use chrono::{Local, NaiveDate};

use crate::error::{EventlyError, EventlyResult};

/// The local calendar date right now.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse YYYY-MM-DD
pub fn parse_date(s: &str) -> EventlyResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| EventlyError::InvalidDate(s.to_string()))
}

/// Parse YYYY-MM as the first day of that month
pub fn parse_month(s: &str) -> EventlyResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| EventlyError::InvalidMonth(s.to_string()))
}

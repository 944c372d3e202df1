//! Conversions between the service's text formats and native values.
//!
//! Money travels as fixed-point decimal text, dates as `YYYY-MM-DD` and
//! date-times as `YYYY-MM-DDTHH:MM:SS`. The service often renders plain
//! dates as midnight date-times, so date parsing ignores a trailing time.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::str::FromStr;

use super::error::XeroError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Format money for the wire: always at least 2 decimal places,
/// trailing zeros beyond that stripped.
pub fn format_money(amount: Decimal) -> String {
    let s = amount.normalize().to_string();
    if let Some(dot_pos) = s.find('.') {
        let decimals = s.len() - dot_pos - 1;
        if decimals < 2 {
            format!("{s}{}", "0".repeat(2 - decimals))
        } else {
            s
        }
    } else {
        format!("{s}.00")
    }
}

pub fn parse_money(text: &str) -> Result<Decimal, XeroError> {
    let trimmed = text.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|e| XeroError::Xml(format!("invalid amount '{trimmed}': {e}")))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_date_time(date_time: NaiveDateTime) -> String {
    date_time.format(DATE_TIME_FORMAT).to_string()
}

/// Parse a date, accepting either `YYYY-MM-DD` or a full date-time.
pub fn parse_date(text: &str) -> Result<NaiveDate, XeroError> {
    let trimmed = text.trim();
    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT)
        .map_err(|e| XeroError::Xml(format!("invalid date '{trimmed}': {e}")))
}

/// Parse a date-time; fractional seconds and a trailing `Z` are accepted,
/// a bare date means midnight.
pub fn parse_date_time(text: &str) -> Result<NaiveDateTime, XeroError> {
    let trimmed = text.trim().trim_end_matches('Z');
    if !trimmed.contains('T') {
        return parse_date(trimmed).map(|d| d.and_time(chrono::NaiveTime::MIN));
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|e| XeroError::Xml(format!("invalid date-time '{trimmed}': {e}")))
}

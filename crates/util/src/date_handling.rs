//! # Date Handling Utilities
//!
//! This module provides strict parsing and detection for the ISO-8601 local
//! date and date-time wire formats used by parameter coercion and type
//! inference. Presentation masks (`dd/MM/yyyy` and friends) are a display
//! concern and never route through here.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static iso date pattern"));

static ISO_DATETIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}$").expect("static iso datetime pattern"));

/// Returns true if a literal has the shape of an ISO local date (`YYYY-MM-DD`).
///
/// Shape only; `2024-13-99` matches. Use [`parse_iso_date`] when the literal
/// must also be a real calendar date.
pub fn is_iso_date_literal(literal: &str) -> bool {
    ISO_DATE.is_match(literal)
}

/// Returns true if a literal has the shape of an ISO local date-time
/// (`YYYY-MM-DDTHH:MM:SS`).
pub fn is_iso_datetime_literal(literal: &str) -> bool {
    ISO_DATETIME.is_match(literal)
}

/// Parses an ISO local date (`YYYY-MM-DD`) into a [`NaiveDate`].
///
/// # Arguments
/// * `literal` - The date string to parse
///
/// # Returns
/// Some parsed date when the literal is a valid calendar date, None otherwise
pub fn parse_iso_date(literal: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(literal.trim(), "%Y-%m-%d").ok()
}

/// Parses an ISO local date-time (`YYYY-MM-DDTHH:MM:SS`, optionally with a
/// fractional-second suffix) into a [`NaiveDateTime`].
///
/// # Arguments
/// * `literal` - The date-time string to parse
///
/// # Returns
/// Some parsed date-time when the literal is valid, None otherwise
pub fn parse_iso_datetime(literal: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(literal.trim(), "%Y-%m-%dT%H:%M:%S%.f").ok()
}

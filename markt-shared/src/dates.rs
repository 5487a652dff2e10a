use chrono::NaiveDate;

/// Calendar format used by the tabular import/export (`dd.MM.yyyy`).
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Marker rendered for products without a finite shelf life.
pub const NO_EXPIRY_LABEL: &str = "no expiry";

/// Parse a `dd.MM.yyyy` date string.
pub fn parse_date(input: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
}

/// Format a date as `dd.MM.yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Format an optional expiry date, rendering `None` as the no-expiry marker.
pub fn format_expiry(expiry: Option<NaiveDate>) -> String {
    match expiry {
        Some(date) => format_date(date),
        None => NO_EXPIRY_LABEL.to_string(),
    }
}

/// Whole days elapsed between two dates. Negative if `to` precedes `from`.
pub fn elapsed_days(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

//! Period key derivation: ISO week and calendar month identifiers.

use chrono::{Datelike, NaiveDate};

/// ISO 8601 week key, zero-padded: `2025-W02`.
/// The week belongs to the year owning its Thursday; weeks run Mon–Sun.
pub fn week_key(date: NaiveDate) -> String {
    let iw = date.iso_week();
    format!("{}-W{:02}", iw.year(), iw.week())
}

/// Calendar month key: `2025-01`.
pub fn month_key(date: NaiveDate) -> String {
    format!("{}-{:02}", date.year(), date.month())
}

/// Canonicalize a week key read from disk.
///
/// Older documents carry unpadded week numbers (`2025-W2`); both forms are
/// accepted on read, only the padded form is written back.
pub fn normalize_week_key(raw: &str) -> Option<String> {
    let re = regex::Regex::new(r"^(\d{4})-W(\d{1,2})$").unwrap();
    let caps = re.captures(raw)?;
    let year = &caps[1];
    let week: u32 = caps[2].parse().ok()?;
    Some(format!("{}-W{:02}", year, week))
}

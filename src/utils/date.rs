use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse a `YYYY-MM` month designator into `(year, month)`.
pub fn parse_month(p: &str) -> Option<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d").ok()?;
    Some((d.year(), d.month()))
}

/// Reference date for a command: explicit argument or today.
pub fn resolve_date(arg: Option<&String>) -> Option<NaiveDate> {
    match arg {
        Some(s) => parse_date(s),
        None => Some(today()),
    }
}

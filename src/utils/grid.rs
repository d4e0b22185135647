//! Plain-text calendar grids (Sunday-first) and ISO week info.
//!
//! Pure functions, no state: month and year grids as formatted text blocks,
//! plus the date/ISO-week tuple used by `cal --week`.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

const WEEKDAY_HEADER: &str = "Su Mo Tu We Th Fr Sa";
const BLOCK_WIDTH: usize = 20;

/// One month as a text block: centered title, weekday header, day rows.
pub fn format_month(year: i32, month: u32) -> AppResult<String> {
    let lines = month_lines(year, month)?;
    Ok(lines.join("\n") + "\n")
}

/// Twelve month blocks, three across, under a centered year banner.
pub fn format_year(year: i32) -> String {
    let mut out = String::new();
    out.push_str(center(&year.to_string(), 3 * BLOCK_WIDTH + 4).trim_end());
    out.push('\n');
    out.push('\n');

    for row_start in [1u32, 4, 7, 10] {
        // months in a fixed 1..=12 range, so the per-month lookups cannot fail
        let blocks: Vec<Vec<String>> = (0..3)
            .map(|i| month_lines(year, row_start + i).unwrap())
            .collect();
        let height = blocks.iter().map(|b| b.len()).max().unwrap_or(0);

        for row in 0..height {
            let mut parts = Vec::new();
            for block in &blocks {
                let cell = block.get(row).cloned().unwrap_or_default();
                parts.push(format!("{:<width$}", cell, width = BLOCK_WIDTH));
            }
            out.push_str(parts.join("  ").trim_end());
            out.push('\n');
        }
        out.push('\n');
    }

    out
}

/// ISO week info for a date: `(iso_year, month, iso_week, iso_weekday)`,
/// weekday numbered from Monday = 1.
pub fn week_info(date: NaiveDate) -> (i32, u32, u32, u32) {
    let iw = date.iso_week();
    (
        iw.year(),
        date.month(),
        iw.week(),
        date.weekday().number_from_monday(),
    )
}

/// `2025-01-09 (Thursday)`
pub fn day_line(date: NaiveDate) -> String {
    format!("{} ({})", date, date.format("%A"))
}

fn month_lines(year: i32, month: u32) -> AppResult<Vec<String>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::InvalidDate(format!("{}-{:02}", year, month)))?;

    let title = first.format("%B %Y").to_string();
    let mut lines = vec![
        center(&title, BLOCK_WIDTH).trim_end().to_string(),
        WEEKDAY_HEADER.to_string(),
    ];

    let mut cells = vec!["  ".to_string(); first.weekday().num_days_from_sunday() as usize];
    let mut d = first;
    while d.month() == month {
        cells.push(format!("{:>2}", d.day()));
        if cells.len() == 7 {
            lines.push(cells.join(" "));
            cells.clear();
        }
        d = d.succ_opt().unwrap();
    }
    if !cells.is_empty() {
        lines.push(cells.join(" ").trim_end().to_string());
    }

    Ok(lines)
}

fn center(s: &str, width: usize) -> String {
    if s.len() >= width {
        return s.to_string();
    }
    let pad = (width - s.len()) / 2;
    format!("{}{}{}", " ".repeat(pad), s, " ".repeat(width - s.len() - pad))
}

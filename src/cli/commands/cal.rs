use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::utils::{date, grid};

/// Print calendar grids and ISO week info. Defaults to the current month.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Cal {
        month,
        year,
        week,
        day,
    } = cmd
    {
        if let Some(m) = month {
            let (y, mo) =
                date::parse_month(m).ok_or_else(|| AppError::InvalidDate(m.to_string()))?;
            println!("{}", grid::format_month(y, mo)?);
            return Ok(());
        }

        if let Some(y) = year {
            println!("{}", grid::format_year(*y));
            return Ok(());
        }

        if let Some(w) = week {
            let d = date::parse_date(w).ok_or_else(|| AppError::InvalidDate(w.to_string()))?;
            let (iso_year, _, iso_week, iso_weekday) = grid::week_info(d);
            println!("ISO Week: {}-W{:02}", iso_year, iso_week);
            println!("Weekday: {}", iso_weekday);
            return Ok(());
        }

        if let Some(s) = day {
            let d = date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
            println!("{}", grid::day_line(d));
            return Ok(());
        }

        let today = date::today();
        use chrono::Datelike;
        println!("{}", grid::format_month(today.year(), today.month())?);
    }

    Ok(())
}

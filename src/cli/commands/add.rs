use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::models::Event;
use crate::store::CalendarStore;
use crate::ui::messages;
use crate::utils::date;

/// Add an event to a date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        title,
        time,
        memo,
        priority,
        category,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Assemble the event; unset fields fall back to the data-model
        //    defaults (priority 1, configured default category)
        //
        let event = Event::new(
            title,
            time.as_deref().unwrap_or(""),
            memo.as_deref().unwrap_or(""),
            priority.unwrap_or(1),
            category.as_deref().unwrap_or(&cfg.default_category),
        );

        //
        // 3. Open store
        //
        let (mut store, warning) = CalendarStore::open(&cfg.storage)?;
        if let Some(w) = warning {
            messages::warning(w);
        }

        //
        // 4. Execute logic
        //
        AddLogic::apply(&mut store, d, event)?;
    }

    Ok(())
}

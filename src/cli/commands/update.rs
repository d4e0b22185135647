use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::update::UpdateLogic;
use crate::errors::{AppError, AppResult};
use crate::models::EventPatch;
use crate::store::CalendarStore;
use crate::ui::messages;
use crate::utils::date;

/// Patch the first event matching a title on a date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Update {
        date,
        title,
        new_title,
        time,
        memo,
        priority,
        category,
    } = cmd
    {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let patch = EventPatch {
            title: new_title.clone(),
            time: time.clone(),
            memo: memo.clone(),
            priority: *priority,
            category: category.clone(),
        };

        if patch.is_empty() {
            messages::info("Nothing to update: pass at least one of --title/--time/--memo/--priority/--category.");
            return Ok(());
        }

        let (mut store, warning) = CalendarStore::open(&cfg.storage)?;
        if let Some(w) = warning {
            messages::warning(w);
        }

        UpdateLogic::apply(&mut store, d, title, &patch)?;
    }

    Ok(())
}

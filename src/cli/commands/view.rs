use crate::ai::{self, OllamaClient, SummaryMode};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::view::ViewLogic;
use crate::errors::{AppError, AppResult};
use crate::store::{keys, CalendarStore};
use crate::ui::messages;
use crate::utils::date;

/// Show the schedule for a day, week or month, optionally with an AI comment.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::View { mode, date: date_arg, ai } = cmd {
        let m = SummaryMode::from_code(mode).ok_or_else(|| AppError::InvalidMode(mode.clone()))?;
        let d = date::resolve_date(date_arg.as_ref())
            .ok_or_else(|| AppError::InvalidDate(date_arg.clone().unwrap_or_default()))?;

        let (store, warning) = CalendarStore::open(&cfg.storage)?;
        if let Some(w) = warning {
            messages::warning(w);
        }

        match m {
            SummaryMode::Day => {
                println!("{}", ViewLogic::render_day(&store, d));
            }
            SummaryMode::Week => {
                let grouped = store.get_week(d);
                let title = format!("Week {}", keys::week_key(d));
                println!("{}", ViewLogic::render_period(&title, &grouped));
            }
            SummaryMode::Month => {
                let grouped = store.get_month(d);
                let title = format!("Month {}", keys::month_key(d));
                println!("{}", ViewLogic::render_period(&title, &grouped));
            }
        }

        //
        // Optional AI commentary; an unreachable model is a warning line,
        // never a failed command.
        //
        if *ai {
            let client = OllamaClient::from_config(cfg);
            match ai::analyze(store.document(), &client, m, d) {
                Ok(text) => messages::ai_block(&text),
                Err(e) => messages::warning(format!("AI unavailable: {}", e)),
            }
        }
    }

    Ok(())
}

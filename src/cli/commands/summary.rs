use crate::ai::{self, OllamaClient, SummaryMode};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::CalendarStore;
use crate::ui::messages;
use crate::utils::date;

/// Ask the local model for a day/week/month summary; `--save` stores the
/// text as the period's comment.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { mode, date: date_arg, save } = cmd {
        let m = SummaryMode::from_code(mode).ok_or_else(|| AppError::InvalidMode(mode.clone()))?;
        let d = date::resolve_date(date_arg.as_ref())
            .ok_or_else(|| AppError::InvalidDate(date_arg.clone().unwrap_or_default()))?;

        let (mut store, warning) = CalendarStore::open(&cfg.storage)?;
        if let Some(w) = warning {
            messages::warning(w);
        }

        let client = OllamaClient::from_config(cfg);

        //
        // Best-effort contract: a transport fault is shown inline and the
        // command still exits cleanly.
        //
        let text = match ai::analyze(store.document(), &client, m, d) {
            Ok(text) => text,
            Err(e) => {
                messages::warning(format!("AI unavailable: {}", e));
                return Ok(());
            }
        };

        messages::ai_block(&text);

        if *save {
            let stored = match m {
                SummaryMode::Week => store.set_week_comment(d, &text)?,
                SummaryMode::Month => store.set_month_comment(d, &text)?,
                SummaryMode::Day => {
                    messages::info("Day summaries are not stored; --save ignored.");
                    return Ok(());
                }
            };

            if stored {
                messages::success(format!("Comment saved for the {} of {}", m.as_str(), d));
            } else {
                messages::warning(format!("No {} aggregate to annotate for {}", m.as_str(), d));
            }
        }
    }

    Ok(())
}

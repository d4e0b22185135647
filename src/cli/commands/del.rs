use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::store::CalendarStore;
use crate::ui::messages::{info, warning};
use crate::utils::date;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { date, title, yes } = cmd {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.into()))?;

        //
        // Confirmation prompt (deletes every event with this title)
        //
        if !*yes {
            let prompt = format!(
                "Delete ALL events titled '{}' for {}? This action is irreversible.",
                title, d
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        //
        // Execute deletion
        //
        let (mut store, w) = CalendarStore::open(&cfg.storage)?;
        if let Some(w) = w {
            warning(w);
        }

        DeleteLogic::apply(&mut store, d, title)?;
    }

    Ok(())
}

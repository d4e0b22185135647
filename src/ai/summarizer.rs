//! Best-effort schedule analysis through the local model.
//!
//! The contract mirrors the store's "never crash the caller" stance: an
//! empty day/week/month returns a fixed message without touching the network,
//! and a transport fault comes back as an `Err` whose text the CLI prints
//! inline instead of aborting.

use crate::ai::client::OllamaClient;
use crate::ai::prompt;
use crate::errors::AppResult;
use crate::store::keys::{month_key, week_key};
use crate::store::Document;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SummaryMode {
    Day,
    Week,
    Month,
}

impl SummaryMode {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "day" => Some(Self::Day),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }
}

/// Ask the model for a summary of the day/week/month containing `date`.
///
/// Returns the fixed "no events" text without any transport call when the
/// requested period is empty.
pub fn analyze(
    doc: &Document,
    client: &OllamaClient,
    mode: SummaryMode,
    date: NaiveDate,
) -> AppResult<String> {
    let prompt = match mode {
        SummaryMode::Day => {
            let events = doc.days.get(&date).map(|d| d.events.as_slice()).unwrap_or(&[]);
            if events.is_empty() {
                return Ok(format!("No events recorded for {}.", date));
            }

            let lines: Vec<String> = events.iter().map(|e| prompt::event_line(date, e)).collect();
            prompt::day_prompt(date, &lines.join("\n"))
        }
        SummaryMode::Week => {
            let key = week_key(date);
            let events = doc
                .weeks
                .get(&key)
                .map(|w| w.events.as_slice())
                .unwrap_or(&[]);
            if events.is_empty() {
                return Ok(format!("No events recorded for week {}.", key));
            }

            let lines: Vec<String> = events.iter().map(prompt::tagged_event_line).collect();
            prompt::week_prompt(&key, &lines.join("\n"))
        }
        SummaryMode::Month => {
            let key = month_key(date);
            let events = doc
                .months
                .get(&key)
                .map(|m| m.events.as_slice())
                .unwrap_or(&[]);
            if events.is_empty() {
                return Ok(format!("No events recorded for month {}.", key));
            }

            // Month review reads better in chronological order
            let mut sorted: Vec<_> = events.iter().collect();
            sorted.sort_by(|a, b| (a.date, &a.event.time).cmp(&(b.date, &b.event.time)));

            let lines: Vec<String> = sorted.into_iter().map(prompt::tagged_event_line).collect();
            prompt::month_prompt(&key, &lines.join("\n"))
        }
    };

    client.generate(&prompt)
}

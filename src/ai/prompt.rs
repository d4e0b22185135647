//! Prompt construction for the schedule-coach model.
//!
//! The model only ever sees the event lines of the requested period, never
//! the whole document. Every template repeats the same ground rules: use
//! only the listed events, keep dates and times as given, answer in plain
//! prose with a hard length cap.

use crate::models::{DatedEvent, Event};
use chrono::NaiveDate;

const GROUND_RULES: &str = "Rules:\n\
    1. Use only the events listed above. Do not invent events, dates or times.\n\
    2. Do not move an event to a different date or change its priority.\n\
    3. Plain prose only: no markdown, no lists, no numbering, no tables, no headings.\n\
    4. Keep the answer short and concrete; cut any filler.";

/// One line per event: `- 2025-01-09 18:00 / Quiz prep (study)`.
pub fn event_line(date: NaiveDate, ev: &Event) -> String {
    format!("- {} {} / {} ({})", date, ev.time, ev.title, ev.category)
}

pub fn tagged_event_line(ev: &DatedEvent) -> String {
    event_line(ev.date, &ev.event)
}

pub fn day_prompt(date: NaiveDate, event_lines: &str) -> String {
    format!(
        "You are a fact-based schedule coach working from the user's calendar data.\n\n\
         These are the events for {date}:\n{event_lines}\n\n\
         Summarize the flow of this day in 2-3 sentences, mentioning the most\n\
         important events first (priority 1 is the highest, larger numbers are\n\
         lower). Then give 2-3 sentences of concrete advice for closing out the\n\
         day or preparing tomorrow. 4-6 sentences in total.\n\n{GROUND_RULES}"
    )
}

pub fn week_prompt(week_id: &str, event_lines: &str) -> String {
    format!(
        "You are a fact-based schedule coach working from the user's calendar data.\n\n\
         These are the events of week {week_id}:\n{event_lines}\n\n\
         Describe the pattern of this week in 2-3 sentences: which days carried\n\
         which kind of work, and how work, study, exercise and rest were\n\
         balanced. Stay inside this week; do not reason about other weeks or the\n\
         month as a whole. Then give 2-4 sentences of advice the user can apply\n\
         to the next similar week, as directly actionable suggestions. 4-7\n\
         sentences in total, written as one or two natural paragraphs.\n\n{GROUND_RULES}"
    )
}

pub fn month_prompt(month_id: &str, event_lines: &str) -> String {
    format!(
        "You are a fact-based schedule coach working from the user's calendar data.\n\n\
         These are the events of month {month_id}:\n{event_lines}\n\n\
         Write a month-in-review: 1-2 short paragraphs on the overall rhythm,\n\
         schedule density and how the workload shifted across the month, rather\n\
         than describing individual events. Close with 2-3 sentences proposing a\n\
         routine or time-management adjustment worth trying next month. 4-5\n\
         sentences in total.\n\n{GROUND_RULES}"
    )
}

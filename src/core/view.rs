use crate::models::Event;
use crate::store::CalendarStore;
use crate::utils::table::Table;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Rendering logic for the `view` command. Pure string builders so the
/// output is testable without capturing stdout.
pub struct ViewLogic;

impl ViewLogic {
    /// One day as a table: time, priority, category, title, memo.
    pub fn render_day(store: &CalendarStore, date: NaiveDate) -> String {
        let record = store.get_day(date);

        let mut out = format!("[Schedule - {}]\n", date);
        if record.events.is_empty() {
            out.push_str("No events.\n");
            return out;
        }

        let mut table = Table::new(&["TIME", "PRI", "CATEGORY", "TITLE", "MEMO"]);
        for ev in &record.events {
            table.add_row(vec![
                ev.time.clone(),
                ev.priority.to_string(),
                ev.category.clone(),
                ev.title.clone(),
                ev.memo.clone(),
            ]);
        }
        out.push_str(&table.render());
        out
    }

    /// A week or month regrouped per date, one section per day.
    pub fn render_period(title: &str, grouped: &BTreeMap<NaiveDate, Vec<Event>>) -> String {
        let mut out = format!("[{}]\n", title);

        if grouped.is_empty() {
            out.push_str("No events.\n");
            return out;
        }

        for (date, events) in grouped {
            out.push_str(&format!("\n[{}]\n", date));
            for ev in events {
                out.push_str(&format!(
                    "- ({}) {} / {} / {}\n",
                    ev.priority, ev.title, ev.time, ev.category
                ));
            }
        }

        out
    }
}

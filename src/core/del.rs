use crate::errors::AppResult;
use crate::store::CalendarStore;
use crate::ui::messages::{success, warning};
use chrono::NaiveDate;

/// High-level business logic for the `del` command.
pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove every event titled `title` on `date` (bulk removal).
    /// A missing record is reported to the user, not raised as an error.
    pub fn apply(store: &mut CalendarStore, date: NaiveDate, title: &str) -> AppResult<bool> {
        let removed = store.remove_event(date, title)?;

        if removed {
            success(format!("Events titled '{}' removed for {}", title, date));
        } else {
            warning(format!("No event titled '{}' on {}", title, date));
        }

        Ok(removed)
    }
}

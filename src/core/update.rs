use crate::errors::AppResult;
use crate::models::EventPatch;
use crate::store::CalendarStore;
use crate::ui::messages::{success, warning};
use chrono::NaiveDate;

/// High-level business logic for the `update` command.
pub struct UpdateLogic;

impl UpdateLogic {
    /// Patch the first event titled `old_title` on `date`.
    /// A missing record is reported to the user, not raised as an error.
    pub fn apply(
        store: &mut CalendarStore,
        date: NaiveDate,
        old_title: &str,
        patch: &EventPatch,
    ) -> AppResult<bool> {
        let updated = store.update_event(date, old_title, patch)?;

        if updated {
            success(format!("Event '{}' updated for {}", old_title, date));
        } else {
            warning(format!("No event titled '{}' on {}", old_title, date));
        }

        Ok(updated)
    }
}

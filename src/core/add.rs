use crate::errors::AppResult;
use crate::models::Event;
use crate::store::CalendarStore;
use crate::ui::messages::success;
use chrono::NaiveDate;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(store: &mut CalendarStore, date: NaiveDate, event: Event) -> AppResult<()> {
        let title = event.title.clone();

        store.add_event(date, event)?;

        success(format!("Event '{}' added for {}", title, date));
        Ok(())
    }
}

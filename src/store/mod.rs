pub mod calendar_store;
pub mod document;
pub mod keys;

pub use calendar_store::CalendarStore;
pub use document::{DayRecord, Document, PeriodRecord, StoreWarning};
pub use keys::{month_key, week_key};

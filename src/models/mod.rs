pub mod event;

pub use event::{DatedEvent, Event, EventPatch};

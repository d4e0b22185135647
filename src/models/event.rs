use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single scheduled item, owned by the day record it was added to.
///
/// `title` acts as the addressing key within a day: update patches the first
/// event with a matching title, remove deletes every match. There is no
/// generated id beyond `(date, title)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,      // ⇔ days.*.events[].title (addressing key)
    #[serde(default)]
    pub time: String,       // free-form, not validated ("18:00", "evening", "")
    #[serde(default)]
    pub memo: String,       // free-form note
    #[serde(default = "default_priority")]
    pub priority: i32,      // 1 = highest, conventionally 1..=5
    #[serde(default)]
    pub category: String,   // free-form label ("work", "exercise", ...)
}

fn default_priority() -> i32 {
    1
}

impl Event {
    pub fn new(title: &str, time: &str, memo: &str, priority: i32, category: &str) -> Self {
        Self {
            title: title.to_string(),
            time: time.to_string(),
            memo: memo.to_string(),
            priority,
            category: category.to_string(),
        }
    }
}

/// An event copied into a week/month aggregate, stamped with its origin date.
///
/// Serialized flat: the event fields at the top level plus a trailing `date`
/// key, so the persisted aggregate entries read `{...event, "date": "YYYY-MM-DD"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedEvent {
    #[serde(flatten)]
    pub event: Event,
    pub date: NaiveDate,
}

/// A partial field-set for `update`: only fields that are present overwrite.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub time: Option<String>,
    pub memo: Option<String>,
    pub priority: Option<i32>,
    pub category: Option<String>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.time.is_none()
            && self.memo.is_none()
            && self.priority.is_none()
            && self.category.is_none()
    }

    pub fn apply_to(&self, ev: &mut Event) {
        if let Some(t) = &self.title {
            ev.title = t.clone();
        }
        if let Some(t) = &self.time {
            ev.time = t.clone();
        }
        if let Some(m) = &self.memo {
            ev.memo = m.clone();
        }
        if let Some(p) = self.priority {
            ev.priority = p;
        }
        if let Some(c) = &self.category {
            ev.category = c.clone();
        }
    }
}

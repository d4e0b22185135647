//! The event store: owns the calendar document, keeps the derived week and
//! month maps consistent with the day map, and persists the whole document
//! after every mutation.

use crate::errors::AppResult;
use crate::models::{DatedEvent, Event, EventPatch};
use crate::store::document::{DayRecord, Document, PeriodRecord, StoreWarning};
use crate::store::keys::{month_key, week_key};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub struct CalendarStore {
    path: PathBuf,
    doc: Document,
}

impl CalendarStore {
    /// Open (or create) the calendar document at `path`.
    ///
    /// - Missing file: an empty document is created and written immediately.
    /// - Unreadable file: the store starts empty and the caller receives a
    ///   `StoreWarning`; opening never fails on bad content, only on I/O.
    pub fn open(path: &str) -> AppResult<(Self, Option<StoreWarning>)> {
        let path = Path::new(path).to_path_buf();

        if !path.exists() {
            let mut store = Self {
                path,
                doc: Document::default(),
            };
            store.save()?;
            return Ok((store, None));
        }

        let content = fs::read_to_string(&path)?;

        match serde_json::from_str::<Document>(&content) {
            Ok(mut doc) => {
                doc.normalize();
                Ok((Self { path, doc }, None))
            }
            Err(e) => {
                let warning = StoreWarning::DiscardedCorrupt {
                    reason: e.to_string(),
                };
                let mut store = Self {
                    path,
                    doc: Document::default(),
                };
                store.save()?;
                Ok((store, Some(warning)))
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read-only view of the whole document (used by the summarizer).
    pub fn document(&self) -> &Document {
        &self.doc
    }

    // ===========================================================
    // MUTATIONS
    // ===========================================================

    /// Append an event to the day record for `date`, creating the record if
    /// absent. Duplicate titles are allowed and produce two events.
    pub fn add_event(&mut self, date: NaiveDate, event: Event) -> AppResult<()> {
        self.doc.days.entry(date).or_default().events.push(event);
        self.recompute();
        self.save()
    }

    /// Patch the first event on `date` whose title equals `old_title`.
    ///
    /// Returns `Ok(false)` when the date has no record or no title matches;
    /// nothing is recomputed or written in that case.
    pub fn update_event(
        &mut self,
        date: NaiveDate,
        old_title: &str,
        patch: &EventPatch,
    ) -> AppResult<bool> {
        let Some(day) = self.doc.days.get_mut(&date) else {
            return Ok(false);
        };
        let Some(ev) = day.events.iter_mut().find(|e| e.title == old_title) else {
            return Ok(false);
        };

        patch.apply_to(ev);
        self.recompute();
        self.save()?;
        Ok(true)
    }

    /// Remove every event on `date` whose title equals `title` (bulk, not
    /// just the first match). A day record emptied by the removal is kept as
    /// an empty record.
    ///
    /// Returns `Ok(false)` when no event matched.
    pub fn remove_event(&mut self, date: NaiveDate, title: &str) -> AppResult<bool> {
        let Some(day) = self.doc.days.get_mut(&date) else {
            return Ok(false);
        };

        let before = day.events.len();
        day.events.retain(|e| e.title != title);

        if day.events.len() == before {
            return Ok(false);
        }

        self.recompute();
        self.save()?;
        Ok(true)
    }

    /// Attach a free-text comment to the ISO week containing `date`.
    /// Returns `Ok(false)` when that week has no aggregate (no events).
    pub fn set_week_comment(&mut self, date: NaiveDate, text: &str) -> AppResult<bool> {
        let key = week_key(date);
        match self.doc.weeks.get_mut(&key) {
            Some(rec) => {
                rec.ai_comment = text.to_string();
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Attach a free-text comment to the calendar month containing `date`.
    /// Returns `Ok(false)` when that month has no aggregate.
    pub fn set_month_comment(&mut self, date: NaiveDate, text: &str) -> AppResult<bool> {
        let key = month_key(date);
        match self.doc.months.get_mut(&key) {
            Some(rec) => {
                rec.ai_comment = text.to_string();
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // ===========================================================
    // QUERIES
    // ===========================================================

    /// The day record for `date`, or an empty record if absent. Never fails.
    pub fn get_day(&self, date: NaiveDate) -> DayRecord {
        self.doc.days.get(&date).cloned().unwrap_or_default()
    }

    /// All events in the ISO week containing `date`, regrouped per date.
    ///
    /// Inverse of the flattening done by recomputation: within each date the
    /// events come back in their stored order, without the origin-date tag.
    pub fn get_week(&self, date: NaiveDate) -> BTreeMap<NaiveDate, Vec<Event>> {
        self.regroup(self.doc.weeks.get(&week_key(date)))
    }

    /// All events in the calendar month containing `date`, regrouped per date.
    pub fn get_month(&self, date: NaiveDate) -> BTreeMap<NaiveDate, Vec<Event>> {
        self.regroup(self.doc.months.get(&month_key(date)))
    }

    fn regroup(&self, rec: Option<&PeriodRecord>) -> BTreeMap<NaiveDate, Vec<Event>> {
        let mut out: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();
        if let Some(rec) = rec {
            for tagged in &rec.events {
                out.entry(tagged.date).or_default().push(tagged.event.clone());
            }
        }
        out
    }

    // ===========================================================
    // RECOMPUTATION + PERSISTENCE
    // ===========================================================

    /// Rebuild the week and month maps from the day map.
    ///
    /// Full rebuild, no incremental patching: the old maps are snapshotted
    /// only to carry each aggregate's `ai_comment` forward. Aggregate event
    /// order is the day map's ascending-date iteration order, and within a
    /// day, the stored event order.
    fn recompute(&mut self) {
        let old_weeks = std::mem::take(&mut self.doc.weeks);
        let old_months = std::mem::take(&mut self.doc.months);

        let mut weeks: BTreeMap<String, PeriodRecord> = BTreeMap::new();
        let mut months: BTreeMap<String, PeriodRecord> = BTreeMap::new();

        for (date, day) in &self.doc.days {
            let wkey = week_key(*date);
            let mkey = month_key(*date);

            for ev in &day.events {
                let tagged = DatedEvent {
                    event: ev.clone(),
                    date: *date,
                };

                weeks
                    .entry(wkey.clone())
                    .or_insert_with(|| PeriodRecord::carried_from(old_weeks.get(&wkey)))
                    .events
                    .push(tagged.clone());

                months
                    .entry(mkey.clone())
                    .or_insert_with(|| PeriodRecord::carried_from(old_months.get(&mkey)))
                    .events
                    .push(tagged);
            }
        }

        self.doc.weeks = weeks;
        self.doc.months = months;
    }

    /// Write the whole document to disk. A mutation that cannot persist must
    /// not report success, so I/O failures propagate to the caller.
    fn save(&mut self) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.doc)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

//! The persisted calendar document and its record types.
//!
//! One `Document` per store instance: a day map (authoritative), plus week
//! and month maps derived from it. The whole document is loaded on open and
//! rewritten on every mutation; there is no partial persistence.

use crate::models::{DatedEvent, Event};
use crate::store::keys;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root persisted entity. Top-level JSON keys: `days`, `weeks`, `months`.
///
/// BTreeMap keys give the day map its natural ascending-date iteration
/// order, which fixes the cross-day event order inside every aggregate.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub days: BTreeMap<NaiveDate, DayRecord>,
    #[serde(default)]
    pub weeks: BTreeMap<String, PeriodRecord>,
    #[serde(default)]
    pub months: BTreeMap<String, PeriodRecord>,
}

/// Authoritative per-date record. Events keep insertion order.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct DayRecord {
    #[serde(default)]
    pub events: Vec<Event>,
}

/// Derived week/month aggregate: the flattened, date-tagged event sequence
/// plus the free-text AI comment. The comment is the only field that
/// survives a rebuild; the event list is always reconstructed from zero.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PeriodRecord {
    #[serde(default)]
    pub events: Vec<DatedEvent>,
    #[serde(default)]
    pub ai_comment: String,
}

impl PeriodRecord {
    /// Fresh aggregate for a rebuild, carrying the comment forward from the
    /// previous aggregate under the same key, if there was one.
    pub fn carried_from(prev: Option<&PeriodRecord>) -> Self {
        Self {
            events: Vec::new(),
            ai_comment: prev.map(|p| p.ai_comment.clone()).unwrap_or_default(),
        }
    }
}

/// Non-fatal signal raised while opening a store.
#[derive(Debug)]
pub enum StoreWarning {
    /// The file existed but was not a readable calendar document; it was
    /// replaced with an empty one.
    DiscardedCorrupt { reason: String },
}

impl std::fmt::Display for StoreWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreWarning::DiscardedCorrupt { reason } => {
                write!(f, "unreadable calendar file replaced with an empty one ({})", reason)
            }
        }
    }
}

impl Document {
    /// Post-load cleanup: rewrite legacy unpadded week keys (`2025-W2`) to
    /// the canonical padded form. Missing `events`/`ai_comment` fields are
    /// already backfilled by the serde defaults above.
    pub fn normalize(&mut self) {
        let weeks = std::mem::take(&mut self.weeks);
        for (key, rec) in weeks {
            let canon = keys::normalize_week_key(&key).unwrap_or(key);
            self.weeks.entry(canon).or_insert(rec);
        }
    }
}

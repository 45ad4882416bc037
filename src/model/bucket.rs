// File: src/model/bucket.rs
//! Splits events into past / ongoing / future relative to one instant.
use crate::model::Event;
use chrono::NaiveDateTime;
use std::fmt;
use strum::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Bucket {
    All,
    Past,
    Ongoing,
    Future,
}

impl Bucket {
    /// Name of the JSON document this bucket is exported to.
    pub fn file_name(&self) -> &'static str {
        match self {
            Bucket::All => "all.json",
            Bucket::Past => "past.json",
            Bucket::Ongoing => "ongoing.json",
            Bucket::Future => "future.json",
        }
    }

    /// Membership test. All comparisons are strict: an event ending exactly
    /// at `now` is neither past nor ongoing, one starting exactly at `now`
    /// is not ongoing.
    pub fn contains(&self, event: &Event, now: NaiveDateTime) -> bool {
        match self {
            Bucket::All => true,
            Bucket::Past => event.ends < now,
            Bucket::Ongoing => event.from < now && event.ends > now,
            Bucket::Future => event.ends > now,
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bucket::All => write!(f, "all"),
            Bucket::Past => write!(f, "past"),
            Bucket::Ongoing => write!(f, "ongoing"),
            Bucket::Future => write!(f, "future"),
        }
    }
}

/// The four views over one event list, computed against a single snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buckets {
    pub now: NaiveDateTime,
    pub all: Vec<Event>,
    pub past: Vec<Event>,
    pub ongoing: Vec<Event>,
    pub future: Vec<Event>,
}

impl Buckets {
    pub fn new(events: &[Event], now: NaiveDateTime) -> Self {
        let select = |bucket: Bucket| -> Vec<Event> {
            events
                .iter()
                .filter(|e| bucket.contains(e, now))
                .cloned()
                .collect()
        };

        Self {
            now,
            all: select(Bucket::All),
            past: select(Bucket::Past),
            ongoing: select(Bucket::Ongoing),
            future: select(Bucket::Future),
        }
    }

    pub fn get(&self, bucket: Bucket) -> &[Event] {
        match bucket {
            Bucket::All => &self.all,
            Bucket::Past => &self.past,
            Bucket::Ongoing => &self.ongoing,
            Bucket::Future => &self.future,
        }
    }
}

// File: src/model/parser.rs
// Turns feed items into events: filter, match dates, normalise.
use crate::model::matcher::{self, DateParseError};
use crate::model::{Event, ItemFilter, MonthTable, RawItem};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What to do with an item whose title matched a date shape that turned out
/// not to be a real date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateErrorPolicy {
    /// Stop the whole run.
    #[default]
    Abort,
    /// Log a warning and leave the item out.
    Skip,
}

/// A date failure attached to the item it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDateError {
    pub title: String,
    pub error: DateParseError,
}

impl fmt::Display for ItemDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not read the date of '{}': {}", self.title, self.error)
    }
}

impl std::error::Error for ItemDateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FeedParser {
    pub filter: ItemFilter,
    pub months: MonthTable,
    pub policy: DateErrorPolicy,
}

impl FeedParser {
    pub fn new(filter: ItemFilter, months: MonthTable, policy: DateErrorPolicy) -> Self {
        Self {
            filter,
            months,
            policy,
        }
    }

    /// Dates for a single relevant item, or `None` when the title has no date.
    pub fn match_item(&self, item: &RawItem) -> Result<Option<Event>, DateParseError> {
        let title = matcher::clean_title(&item.title);
        log::debug!("title is \"{}\"", title);

        let found = matcher::match_title(&title, &self.months)?;
        Ok(found
            .bounds()
            .map(|(from, to)| Event::new(item, from, to)))
    }

    /// Processes items in feed order. The returned events keep that order.
    pub fn parse(&self, items: &[RawItem]) -> Result<Vec<Event>, ItemDateError> {
        let mut events = Vec::new();

        log::info!("parsing");

        for item in items {
            log::debug!("new item");

            if !self.filter.is_relevant(item) {
                continue;
            }

            match self.match_item(item) {
                Ok(Some(event)) => events.push(event),
                Ok(None) => {
                    log::debug!("ignoring item, couldn't find a date in the title");
                }
                Err(e) => {
                    let err = ItemDateError {
                        title: item.title.clone(),
                        error: e,
                    };
                    match self.policy {
                        DateErrorPolicy::Abort => return Err(err),
                        DateErrorPolicy::Skip => log::warn!("skipping item: {}", err),
                    }
                }
            }
        }

        log::info!("finished with item parsing");

        Ok(events)
    }
}

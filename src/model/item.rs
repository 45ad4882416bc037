// File: ./src/model/item.rs
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// One `<item>` of the upstream feed, as read from the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawItem {
    pub title: String,
    pub link: String,
    pub content: String,
    pub categories: Vec<String>,
}

impl RawItem {
    pub fn has_category(&self, label: &str) -> bool {
        self.categories.iter().any(|c| c == label)
    }
}

/// A strike, spanning whole days.
///
/// `from` is always midnight of the first day and `ends` the last second of
/// the final day, so plain datetime comparisons against "now" work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub link: String,
    pub from: NaiveDateTime,
    pub ends: NaiveDateTime,
}

impl Event {
    /// Builds an event from a feed item and the dates found in its title.
    /// Without an end date the event covers the start day only.
    pub fn new(item: &RawItem, from_date: NaiveDate, end_date: Option<NaiveDate>) -> Self {
        let end_date = end_date.unwrap_or(from_date);

        log::debug!("saving item");

        Self {
            title: item.title.clone(),
            link: item.link.clone(),
            from: start_of_day(from_date),
            ends: end_of_day(end_date),
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.from.date()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.ends.date()
    }
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

// 23:59:59
fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + Duration::seconds(24 * 60 * 60 - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn item() -> RawItem {
        RawItem {
            title: "Sciopero Atac 15 aprile 2020".to_string(),
            link: "http://example.com/sciopero".to_string(),
            content: String::new(),
            categories: vec!["mezzi pubblici".to_string()],
        }
    }

    #[test]
    fn test_single_day_event_spans_whole_day() {
        let day = NaiveDate::from_ymd_opt(2020, 4, 15).unwrap();
        let ev = Event::new(&item(), day, None);

        assert_eq!(ev.start_date(), day);
        assert_eq!(ev.end_date(), day);
        assert_eq!((ev.from.hour(), ev.from.minute(), ev.from.second()), (0, 0, 0));
        assert_eq!((ev.ends.hour(), ev.ends.minute(), ev.ends.second()), (23, 59, 59));
        assert!(ev.from <= ev.ends);
    }

    #[test]
    fn test_range_event_copies_item_fields() {
        let from = NaiveDate::from_ymd_opt(2020, 3, 3).unwrap();
        let to = NaiveDate::from_ymd_opt(2020, 3, 8).unwrap();
        let ev = Event::new(&item(), from, Some(to));

        assert_eq!(ev.title, "Sciopero Atac 15 aprile 2020");
        assert_eq!(ev.link, "http://example.com/sciopero");
        assert_eq!(ev.from.to_string(), "2020-03-03 00:00:00");
        assert_eq!(ev.ends.to_string(), "2020-03-08 23:59:59");
    }

    #[test]
    fn test_has_category_is_exact() {
        let it = item();
        assert!(it.has_category("mezzi pubblici"));
        assert!(!it.has_category("Mezzi pubblici"));
        assert!(!it.has_category("mezzi"));
    }
}

// File: src/export.rs
//! JSON and iCalendar documents built from the parsed events.
use crate::config::CalendarMeta;
use crate::model::{Bucket, Buckets, Event};
use crate::storage::DocumentSink;
use anyhow::{Context, Result};
use icalendar::{Calendar, Component, EventLike};
use strum::IntoEnumIterator;

pub const ICAL_FILE_NAME: &str = "all.ical";

/// JSON array of `{title, link, from, ends}` objects, in the given order.
pub fn to_json(events: &[Event]) -> Result<String> {
    serde_json::to_string_pretty(events).context("Failed to serialize events")
}

/// Writes one JSON document per bucket.
pub fn write_json(sink: &dyn DocumentSink, buckets: &Buckets) -> Result<()> {
    log::info!("writing json files");

    for bucket in Bucket::iter() {
        let json = to_json(buckets.get(bucket))?;
        sink.persist(bucket.file_name(), &json)?;
    }

    log::info!("finished writing json files");
    Ok(())
}

// TEXT value escaping (RFC 5545 3.3.11) for the header properties we write by hand.
fn escape_text(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}

/// Full VCALENDAR for a single event, as produced by the icalendar crate.
fn event_to_ics(event: &Event) -> String {
    let mut vevent = icalendar::Event::new();
    // UID must stay the same across runs; the permalink does.
    vevent.uid(&event.link);
    vevent.summary(&event.title);
    vevent.starts(event.start_date());
    vevent.ends(event.end_date());
    vevent.description(&event.link);

    let mut calendar = Calendar::new();
    calendar.push(vevent);
    calendar.to_string()
}

/// Generates a single VCALENDAR string with one all-day VEVENT per event.
pub fn to_ics_string(events: &[Event], meta: &CalendarMeta) -> String {
    let mut output = String::from("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n");
    output.push_str(&format!("PRODID:{}\r\n", meta.prodid));
    output.push_str(&format!("X-WR-CALNAME:{}\r\n", escape_text(&meta.name)));
    output.push_str(&format!("X-WR-CALDESC:{}\r\n", escape_text(&meta.description)));
    output.push_str(&format!("X-PUBLISHED-TTL:{}\r\n", meta.ttl));

    for event in events {
        let full_ics = event_to_ics(event);
        // Extract the VEVENT block from the wrapper calendar
        if let Some(start) = full_ics.find("BEGIN:VEVENT")
            && let Some(end_idx) = full_ics.rfind("END:VEVENT")
        {
            // "END:VEVENT" is 10 chars long
            output.push_str(&full_ics[start..end_idx + 10]);
            output.push_str("\r\n");
        }
    }

    output.push_str("END:VCALENDAR\r\n");
    output
}

pub fn write_ical(sink: &dyn DocumentSink, events: &[Event], meta: &CalendarMeta) -> Result<()> {
    log::info!("making ical file");

    sink.persist(ICAL_FILE_NAME, &to_ics_string(events, meta))?;

    log::info!("finished writing ical file");
    Ok(())
}

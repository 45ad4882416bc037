// File: src/model/matcher.rs
//! Recovers dates from Italian strike titles.
//!
//! Three textual shapes are recognised, tried in a fixed order where the first
//! hit wins:
//!
//! 1. `dal 3 al 8 marzo 2020` (both days in the same month)
//! 2. `dal 28 febbraio al 2 marzo 2020` (start month spelled out)
//! 3. `15 aprile 2020` (a single day anywhere in the title)
//!
//! Once a shape matches, the date text must parse. A failure there is reported
//! as a [`DateParseError`] and the lower-priority shapes are not attempted.
use crate::model::months::MonthTable;
use chrono::{Datelike, Duration, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// Digit and word classes are ASCII only; other scripts never match.
static SAME_MONTH_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"dal ([0-9]{1,2}) al ([0-9]{1,2} [A-Za-z0-9_]+ [0-9]{4})")
        .expect("same-month pattern is valid")
});

static CROSS_MONTH_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"dal ([0-9]{1,2} [A-Za-z0-9_]+) al ([0-9]{1,2} [A-Za-z0-9_]+ [0-9]{4})")
        .expect("cross-month pattern is valid")
});

static SINGLE_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]{1,2} [A-Za-z0-9_]+ [0-9]{4}").expect("single-date pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    /// The text does not have the `<day> <month> <year>` layout.
    Malformed(String),
    /// The month word is not in the month table.
    UnknownMonth(String),
    /// Day, month and year do not form a real calendar date (e.g. 30 febbraio).
    InvalidDate(String),
    /// Range arithmetic left the representable calendar.
    OutOfRange(String),
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateParseError::Malformed(s) => write!(f, "malformed date '{}'", s),
            DateParseError::UnknownMonth(s) => write!(f, "unknown month in '{}'", s),
            DateParseError::InvalidDate(s) => write!(f, "not a calendar date: '{}'", s),
            DateParseError::OutOfRange(s) => write!(f, "date range out of bounds: '{}'", s),
        }
    }
}

impl std::error::Error for DateParseError {}

/// Outcome of scanning a title for dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateMatch {
    NoMatch,
    SingleDate(NaiveDate),
    SameMonthRange { from: NaiveDate, to: NaiveDate },
    CrossMonthRange { from: NaiveDate, to: NaiveDate },
}

impl DateMatch {
    /// Start date and optional end date, or `None` for [`DateMatch::NoMatch`].
    pub fn bounds(&self) -> Option<(NaiveDate, Option<NaiveDate>)> {
        match *self {
            DateMatch::NoMatch => None,
            DateMatch::SingleDate(d) => Some((d, None)),
            DateMatch::SameMonthRange { from, to } | DateMatch::CrossMonthRange { from, to } => {
                Some((from, Some(to)))
            }
        }
    }
}

/// Normalises a raw title before matching.
///
/// Drops the degree sign used as an ordinal marker ("8°") and rewrites the
/// elided "all'" so that "dall'8 al 10" reads "dal 8 al 10".
pub fn clean_title(title: &str) -> String {
    title.replace('°', "").replace("all'", "al ")
}

/// Strict `<day> <month-name> <year>` parser.
///
/// The day takes one or two digits, the month must be a full name from
/// `months`, the year exactly four digits. Anything else is an error.
pub fn parse_date(s: &str, months: &MonthTable) -> Result<NaiveDate, DateParseError> {
    let parts: Vec<&str> = s.split(' ').collect();
    let [day, month, year] = parts[..] else {
        return Err(DateParseError::Malformed(s.to_string()));
    };

    let is_digits = |v: &str, min: usize, max: usize| {
        (min..=max).contains(&v.len()) && v.chars().all(|c| c.is_ascii_digit())
    };
    if !is_digits(day, 1, 2) || !is_digits(year, 4, 4) {
        return Err(DateParseError::Malformed(s.to_string()));
    }

    let month_num = months
        .lookup(month)
        .ok_or_else(|| DateParseError::UnknownMonth(s.to_string()))?;
    let day_num: u32 = day
        .parse()
        .map_err(|_| DateParseError::Malformed(s.to_string()))?;
    let year_num: i32 = year
        .parse()
        .map_err(|_| DateParseError::Malformed(s.to_string()))?;

    NaiveDate::from_ymd_opt(year_num, month_num, day_num)
        .ok_or_else(|| DateParseError::InvalidDate(s.to_string()))
}

/// Scans an already cleaned title (see [`clean_title`]) for a date expression.
pub fn match_title(title: &str, months: &MonthTable) -> Result<DateMatch, DateParseError> {
    if let Some(caps) = SAME_MONTH_RANGE.captures(title) {
        log::debug!(
            "matched same month date range: ({:?}, {:?})",
            &caps[1],
            &caps[2]
        );
        let to = parse_date(&caps[2], months)?;
        let from_day: i64 = caps[1]
            .parse()
            .map_err(|_| DateParseError::Malformed(caps[1].to_string()))?;

        // Walk back from the end date by the day difference. A start day larger
        // than the end day therefore moves forward past the end date.
        let offset = i64::from(to.day()) - from_day;
        let from = to
            .checked_sub_signed(Duration::days(offset))
            .ok_or_else(|| DateParseError::OutOfRange(caps[0].to_string()))?;
        if from > to {
            log::warn!("start day lies after end date in '{}'", &caps[0]);
        }
        return Ok(DateMatch::SameMonthRange { from, to });
    }

    if let Some(caps) = CROSS_MONTH_RANGE.captures(title) {
        log::debug!(
            "matched different month date range: ({:?}, {:?})",
            &caps[1],
            &caps[2]
        );
        let to = parse_date(&caps[2], months)?;
        let from = parse_date(&format!("{} {}", &caps[1], to.year()), months)?;
        return Ok(DateMatch::CrossMonthRange { from, to });
    }

    if let Some(m) = SINGLE_DATE.find(title) {
        log::debug!("matched single date: \"{}\"", m.as_str());
        let date = parse_date(m.as_str(), months)?;
        return Ok(DateMatch::SingleDate(date));
    }

    Ok(DateMatch::NoMatch)
}

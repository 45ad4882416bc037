// File: tests/feed_parser.rs
// Filter -> matcher -> normaliser over whole item lists.
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use sciopero::model::{
    DateErrorPolicy, DateParseError, FeedParser, ItemFilter, MonthTable, RawItem,
};

fn item(title: &str, content: &str, cats: &[&str]) -> RawItem {
    RawItem {
        title: title.to_string(),
        link: format!("http://www.06blog.it/post/{}", title.len()),
        content: content.to_string(),
        categories: cats.iter().map(|c| c.to_string()).collect(),
    }
}

fn transport(title: &str) -> RawItem {
    item(title, "", &["scioperi", "mezzi pubblici"])
}

fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
}

#[test]
fn test_same_month_range() {
    let events = FeedParser::default()
        .parse(&[transport("Sciopero Atac dal 3 al 8 marzo 2020")])
        .unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].from, dt("2020-03-03T00:00:00"));
    assert_eq!(events[0].ends, dt("2020-03-08T23:59:59"));
}

#[test]
fn test_cross_month_range() {
    let events = FeedParser::default()
        .parse(&[transport("Atac: sciopero dal 28 febbraio al 2 marzo 2020")])
        .unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].from, dt("2020-02-28T00:00:00"));
    assert_eq!(events[0].ends, dt("2020-03-02T23:59:59"));
}

#[test]
fn test_single_date() {
    let events = FeedParser::default()
        .parse(&[transport("Sciopero Atac 15 aprile 2020")])
        .unwrap();

    assert_eq!(events.len(), 1);
    let day = NaiveDate::from_ymd_opt(2020, 4, 15).unwrap();
    assert_eq!(events[0].start_date(), day);
    assert_eq!(events[0].end_date(), day);
    assert_eq!(events[0].from.time().num_seconds_from_midnight(), 0);
    assert_eq!(
        (events[0].ends.hour(), events[0].ends.minute(), events[0].ends.second()),
        (23, 59, 59)
    );
}

#[test]
fn test_other_operator_is_dropped() {
    let events = FeedParser::default()
        .parse(&[transport("Sciopero Coltral 10 maggio 2020")])
        .unwrap();
    assert!(events.is_empty());
}

#[test]
fn test_elided_start_day() {
    let events = FeedParser::default()
        .parse(&[transport("Sciopero Atac dall'8 al 10 giugno 2020")])
        .unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].start_date(),
        NaiveDate::from_ymd_opt(2020, 6, 8).unwrap()
    );
    assert_eq!(
        events[0].end_date(),
        NaiveDate::from_ymd_opt(2020, 6, 10).unwrap()
    );
}

#[test]
fn test_title_and_link_are_kept_verbatim() {
    let raw = transport("Sciopero Atac dall'8° al 10 giugno 2020");
    let events = FeedParser::default().parse(std::slice::from_ref(&raw)).unwrap();

    assert_eq!(events[0].title, raw.title);
    assert_eq!(events[0].link, raw.link);
}

#[test]
fn test_keyword_in_content_is_enough() {
    let events = FeedParser::default()
        .parse(&[item(
            "Sciopero trasporti 20 luglio 2020",
            "<p>Bus e metro Atac a rischio</p>",
            &["mezzi pubblici"],
        )])
        .unwrap();
    assert_eq!(events.len(), 1);
}

#[test]
fn test_undated_and_uncategorised_items_are_dropped() {
    let items = vec![
        transport("Sciopero Atac, date da definire"),
        item("Sciopero Atac 15 aprile 2020", "", &["scioperi"]),
    ];
    assert!(FeedParser::default().parse(&items).unwrap().is_empty());
}

#[test]
fn test_output_follows_feed_order() {
    let items = vec![
        transport("Sciopero Atac 15 aprile 2020"),
        transport("Sciopero Cotral 1 aprile 2020"),
        transport("Sciopero Atac dal 3 al 8 marzo 2020"),
        item("Sciopero Atac 1 gennaio 2020", "", &["treni"]),
        transport("Atac: sciopero dal 28 febbraio al 2 marzo 2020"),
    ];
    let events = FeedParser::default().parse(&items).unwrap();

    let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Sciopero Atac 15 aprile 2020",
            "Sciopero Atac dal 3 al 8 marzo 2020",
            "Atac: sciopero dal 28 febbraio al 2 marzo 2020",
        ]
    );
}

#[test]
fn test_every_event_is_normalised() {
    let items = vec![
        transport("Sciopero Atac 15 aprile 2020"),
        transport("Sciopero Atac dal 3 al 8 marzo 2020"),
        transport("Atac: sciopero dal 28 febbraio al 2 marzo 2020"),
        transport("Sciopero Atac dall'8 al 10 giugno 2020"),
        transport("Sciopero Atac dal 30 dicembre al 2 gennaio 2021"),
    ];
    let events = FeedParser::default().parse(&items).unwrap();
    assert_eq!(events.len(), 5);

    for e in &events {
        assert_eq!(e.from.time().num_seconds_from_midnight(), 0, "{}", e.title);
        assert_eq!(e.ends.time().num_seconds_from_midnight(), 86_399, "{}", e.title);
    }
    for e in &events[..4] {
        assert!(e.from <= e.ends, "{}", e.title);
    }
}

#[test]
fn test_invalid_date_aborts_by_default() {
    let items = vec![
        transport("Sciopero Atac 15 aprile 2020"),
        transport("Sciopero Atac 31 aprile 2020"),
    ];
    let err = FeedParser::default().parse(&items).unwrap_err();

    assert_eq!(err.title, "Sciopero Atac 31 aprile 2020");
    assert!(matches!(err.error, DateParseError::InvalidDate(_)));
    assert!(err.to_string().contains("31 aprile 2020"));
}

#[test]
fn test_invalid_date_can_be_skipped() {
    let parser = FeedParser::new(
        ItemFilter::default(),
        MonthTable::italian(),
        DateErrorPolicy::Skip,
    );
    let items = vec![
        transport("Sciopero Atac 31 aprile 2020"),
        transport("Sciopero Atac dal 3 al 8 marzolo 2020"),
        transport("Sciopero Atac 15 aprile 2020"),
    ];
    let events = parser.parse(&items).unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "Sciopero Atac 15 aprile 2020");
}

#[test]
fn test_irrelevant_items_never_reach_the_matcher() {
    // Broken date, but the item is filtered out first.
    let items = vec![item("Sciopero Coltral 31 aprile 2020", "", &["mezzi pubblici"])];
    assert!(FeedParser::default().parse(&items).unwrap().is_empty());
}

#[test]
fn test_fullwidth_digits_are_not_a_date() {
    let items = vec![
        transport("Sciopero Atac \u{ff13} marzo 2020"),
        transport("Sciopero Atac 15 aprile 2020"),
    ];
    let events = FeedParser::default().parse(&items).unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title, "Sciopero Atac 15 aprile 2020");
}

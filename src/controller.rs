// File: src/controller.rs
//! One complete run: get the feed, turn it into events, write the documents.
//! The binary only wires options and logging around [`run`].
use crate::client::FeedClient;
use crate::config::Config;
use crate::context::AppContext;
use crate::export;
use crate::feed;
use crate::model::Buckets;
use crate::storage::{DocumentSink, OutputDir};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use std::fs;
use std::path::Path;

/// Feed text, from a local file when `input` is given, otherwise over HTTP.
pub async fn fetch_feed(config: &Config, input: Option<&Path>) -> Result<String> {
    if let Some(path) = input {
        log::info!("reading feed from {}", path.display());
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read feed file '{}'", path.display()));
    }

    let client = FeedClient::new(&config.feed_url)?;
    client.fetch().await
}

/// Everything after the fetch. `now` is the single instant used for bucketing.
pub fn process(
    feed_xml: &str,
    config: &Config,
    now: NaiveDateTime,
    sink: &dyn DocumentSink,
) -> Result<Buckets> {
    let items = feed::parse_rss(feed_xml)?;
    let events = config.parser().parse(&items)?;

    let buckets = Buckets::new(&events, now);
    log::info!(
        "{} events: {} past, {} ongoing, {} future",
        buckets.all.len(),
        buckets.past.len(),
        buckets.ongoing.len(),
        buckets.future.len()
    );

    export::write_json(sink, &buckets)?;
    export::write_ical(sink, &buckets.all, &config.calendar)?;

    Ok(buckets)
}

/// The writer lock lives in the context's cache directory, never in `basepath`.
pub async fn run(
    ctx: &dyn AppContext,
    config: &Config,
    input: Option<&Path>,
) -> Result<Buckets> {
    let xml = fetch_feed(config, input).await?;
    let out = OutputDir::new(&config.basepath).with_lock_dir(ctx.get_cache_dir()?);
    process(&xml, config, Local::now().naive_local(), &out)
}

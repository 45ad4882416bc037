// File: ./src/config.rs
// Handles configuration loading and defaults.
use crate::context::AppContext;
use crate::model::filter::{DEFAULT_CATEGORY, DEFAULT_KEYWORD};
use crate::model::{DateErrorPolicy, FeedParser, ItemFilter, MonthTable};
use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_FEED_URL: &str = "http://www.06blog.it/categoria/scioperi/rss2.xml";

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}
fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}
fn default_keyword() -> String {
    DEFAULT_KEYWORD.to_string()
}
fn default_basepath() -> PathBuf {
    PathBuf::from(".")
}
fn default_logfile() -> PathBuf {
    PathBuf::from("sciopero.log")
}

fn default_prodid() -> String {
    "-//Sciopero//jonnylamb.com//".to_string()
}
fn default_calname() -> String {
    "Scioperi a Roma".to_string()
}
fn default_caldesc() -> String {
    "Gli scioperi dell'Atac".to_string()
}
fn default_ttl() -> String {
    "PT23H".to_string()
}

/// Publisher fields written into the calendar header.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CalendarMeta {
    #[serde(default = "default_prodid")]
    pub prodid: String,
    #[serde(default = "default_calname")]
    pub name: String,
    #[serde(default = "default_caldesc")]
    pub description: String,
    /// Suggested refresh interval, as an iCalendar duration.
    #[serde(default = "default_ttl")]
    pub ttl: String,
}

impl Default for CalendarMeta {
    fn default() -> Self {
        Self {
            prodid: default_prodid(),
            name: default_calname(),
            description: default_caldesc(),
            ttl: default_ttl(),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_keyword")]
    pub keyword: String,
    #[serde(default = "default_basepath")]
    pub basepath: PathBuf,
    #[serde(default = "default_logfile")]
    pub logfile: PathBuf,
    #[serde(default)]
    pub on_date_error: DateErrorPolicy,
    #[serde(default)]
    pub calendar: CalendarMeta,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            category: default_category(),
            keyword: default_keyword(),
            basepath: default_basepath(),
            logfile: default_logfile(),
            on_date_error: DateErrorPolicy::default(),
            calendar: CalendarMeta::default(),
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        match Self::load(ctx) {
            Ok(config) => Ok(config),
            Err(e) if Self::is_missing_config_error(&e) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Whether an error from [`Config::load`] means the file was missing,
    /// either by our explicit message or an IO NotFound anywhere in the chain.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }

        for cause in err.chain() {
            if let Some(io_err) = cause.downcast_ref::<std::io::Error>()
                && io_err.kind() == std::io::ErrorKind::NotFound
            {
                return true;
            }
        }

        false
    }

    pub fn filter(&self) -> ItemFilter {
        ItemFilter::new(self.category.clone(), self.keyword.clone())
    }

    pub fn parser(&self) -> FeedParser {
        FeedParser::new(self.filter(), MonthTable::italian(), self.on_date_error)
    }
}

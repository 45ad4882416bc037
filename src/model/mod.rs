// File: ./src/model/mod.rs
pub mod bucket;
pub mod filter;
pub mod item;
pub mod matcher;
pub mod months;
pub mod parser;

pub use bucket::{Bucket, Buckets};
pub use filter::ItemFilter;
pub use item::{Event, RawItem};
pub use matcher::{DateMatch, DateParseError};
pub use months::MonthTable;
pub use parser::{DateErrorPolicy, FeedParser, ItemDateError};

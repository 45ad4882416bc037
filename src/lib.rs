// Crate root library declaration and module exports.
pub mod cli;
pub mod client;
pub mod config;
pub mod context;
pub mod controller;
pub mod export;
pub mod feed;
pub mod logging;
pub mod model;
pub mod storage;

// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod line;
pub mod progress;
pub mod query;
pub mod runner;
pub mod scrape;
pub mod specs;
pub mod store;
pub mod table;

pub use data::{Entity, RecordSet, StatLine};
pub use error::{Error, Result};

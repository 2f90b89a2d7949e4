// src/scrape/mod.rs
pub mod curve;
pub mod wiki;

pub use wiki::WikiOutcome;

//! # Page specs
//!
//! Each spec knows how one remote page lays out its data and turns raw HTML into
//! plain Rust values. They are pure: no fetching, no persistence, no merging.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::{curve, wiki} → core::net::Fetch::get
//!                               ↘ specs::<page>::parse_*  (this module)
//!                               ↘ line / table → data::RecordSet::merge
//!          store::save (outside of specs)
//! ```
//!
//! ## Conventions
//! - Case-insensitive tag matching via `core::html::Doc`; nested elements are balanced.
//! - Text is entity-decoded after tags are stripped, so `&quot;` in a stat line
//!   becomes the `"` the line grammar splits on.
//! - Specs are tested offline against small HTML snippets.
pub mod curve;
pub mod wiki;

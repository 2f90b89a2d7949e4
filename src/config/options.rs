// src/config/options.rs
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// The two upstream sites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Source {
    /// Guide site: one index page, one detail page per creature.
    Curve,
    /// Wiki page of captioned stat tables.
    Wiki,
}

impl Source {
    pub const ALL: [Source; 2] = [Source::Curve, Source::Wiki];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Curve => "curve",
            Source::Wiki => "wiki",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a source lives and where its records are saved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceConfig {
    /// Empty disables the source.
    pub url: String,
    pub out_path: PathBuf,
}

impl SourceConfig {
    pub fn is_enabled(&self) -> bool {
        !self.url.trim().is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub curve: SourceConfig,
    pub wiki: SourceConfig,
    /// Detail-page worker threads for the curve source.
    pub workers: usize,
    pub timeout: Duration,
    /// Pause between one worker's consecutive requests.
    pub request_pause: Duration,
    pub log_file: PathBuf,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            curve: SourceConfig {
                url: s!(CURVE_URL),
                out_path: PathBuf::from(CURVE_FILE),
            },
            wiki: SourceConfig {
                url: s!(),
                out_path: PathBuf::from(WIKI_FILE),
            },
            workers: WORKERS,
            timeout: Duration::from_secs(TIMEOUT_SECS),
            request_pause: Duration::from_millis(REQUEST_PAUSE_MS),
            log_file: PathBuf::from(LOG_FILE),
        }
    }
}

impl ScrapeOptions {
    pub fn source(&self, source: Source) -> &SourceConfig {
        match source {
            Source::Curve => &self.curve,
            Source::Wiki => &self.wiki,
        }
    }

    pub fn source_mut(&mut self, source: Source) -> &mut SourceConfig {
        match source {
            Source::Curve => &mut self.curve,
            Source::Wiki => &mut self.wiki,
        }
    }
}

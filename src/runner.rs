// src/runner.rs
use std::path::{Path, PathBuf};

use crate::{
    config::{ScrapeOptions, Source},
    core::net::Fetch,
    data::RecordSet,
    error::Result,
    progress::Progress,
    query::Query,
    scrape, store,
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// (source, file, creatures written)
    pub files_written: Vec<(Source, PathBuf, usize)>,
    /// Sources skipped because no URL is configured.
    pub skipped: Vec<Source>,
    /// Recoverable table problems from the wiki source.
    pub warnings: usize,
}

/// Scrape each requested source and replace its record file.
/// Stops at the first source that fails; files already written stay.
pub fn run_scrape(
    opts: &ScrapeOptions,
    sources: &[Source],
    fetcher: &dyn Fetch,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for &source in sources {
        let cfg = opts.source(source);
        if !cfg.is_enabled() {
            logf!("Skipping {source}: no URL configured");
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Skipping {source}: no URL configured"));
            }
            summary.skipped.push(source);
            continue;
        }

        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Scraping {source} ({})", cfg.url));
        }
        let set = match source {
            Source::Curve => scrape::curve::run(opts, fetcher, progress.as_deref_mut())?,
            Source::Wiki => {
                let outcome = scrape::wiki::run(opts, fetcher, progress.as_deref_mut())?;
                summary.warnings += outcome.warnings.len();
                outcome.records
            }
        };

        store::save(&set, &cfg.out_path)?;
        summary.files_written.push((source, cfg.out_path.clone(), set.len()));
    }

    Ok(summary)
}

/// Load a record file and apply `query`.
pub fn run_find(path: &Path, query: &Query) -> Result<RecordSet> {
    let set = store::load(path)?;
    let out = query.apply(&set);
    logd!("find {:?}/{:?}: {} of {} creatures", query.name, query.stat, out.len(), set.len());
    Ok(out)
}

/// Pretty JSON with two-space indentation.
pub fn render(set: &RecordSet) -> String {
    // string-keyed maps of strings always serialize
    serde_json::to_string_pretty(set).unwrap_or_else(|_| s!("{}"))
}

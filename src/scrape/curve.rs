// src/scrape/curve.rs
//! Two-phase crawl of the curve-override guide.
//!
//! 1. Fetch the index, discover one `DetailRequest` per creature.
//! 2. Worker threads pull requests off a shared cursor, fetch and parse each detail page,
//!    and send the result down a channel. This thread is the only one that touches the
//!    `RecordSet`.
//!
//! A malformed stat line anywhere fails the whole crawl. The first one trips the cancel
//! flag so no new pages are started; pages already in flight are still received before
//! the error is returned. Detail pages that fail to download are skipped.

use std::{
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        mpsc,
    },
    thread,
};

use crate::{
    config::ScrapeOptions,
    core::net::Fetch,
    data::{RecordSet, StatLine},
    error::{Error, FetchError, ParseError, Result},
    line::parse_line,
    progress::Progress,
    specs::curve::{self, DetailRequest},
};

enum DetailFailure {
    Fetch(FetchError),
    Parse(ParseError),
}

type DetailResult = (DetailRequest, Result<Vec<StatLine>, DetailFailure>);

pub fn run(
    opts: &ScrapeOptions,
    fetcher: &dyn Fetch,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RecordSet> {
    let source = &opts.curve;
    if !source.is_enabled() {
        return Err(Error::SourceDisabled("curve"));
    }

    // Phase 1
    logf!("Curve: fetching index {}", source.url);
    let index = fetcher.get(&source.url)?;
    let requests = curve::parse_index(&index.body, &index.url)?;
    logf!("Curve: {} creatures on index", requests.len());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(requests.len());
    }
    if requests.is_empty() {
        logw!("Curve: index had no creature links; page layout may have changed");
    }

    // Phase 2
    let cursor = AtomicUsize::new(0);
    let cancel = AtomicBool::new(false);
    let (tx, rx) = mpsc::channel::<DetailResult>();
    let workers = opts.workers.min(requests.len()).max(1);
    let pause = opts.request_pause;

    let mut set = RecordSet::new();
    let mut first_err: Option<Error> = None;

    thread::scope(|scope| {
        for _ in 0..workers {
            let tx = tx.clone();
            let (requests, cursor, cancel) = (&requests, &cursor, &cancel);
            scope.spawn(move || {
                loop {
                    if cancel.load(Ordering::Acquire) {
                        break;
                    }
                    let i = cursor.fetch_add(1, Ordering::Relaxed);
                    let Some(req) = requests.get(i) else { break };

                    let result = fetch_detail(fetcher, req);
                    if tx.send((req.clone(), result)).is_err() {
                        break;
                    }
                    if !pause.is_zero() {
                        thread::sleep(pause); // be polite
                    }
                }
            });
        }
        drop(tx); // this thread is the sole receiver now

        // Ends once every worker has exited, so in-flight pages are drained.
        for (req, result) in rx {
            match result {
                Ok(lines) => {
                    if first_err.is_none() {
                        for line in &lines {
                            set.merge_line(&req.name, &req.url, line);
                        }
                    }
                    if lines.is_empty() {
                        logw!("Curve: {} ({}) has no stat lines", req.name, req.url);
                    } else {
                        logd!("Curve: {} → {} stats", req.name, lines.len());
                    }
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(&req.name);
                    }
                }
                Err(DetailFailure::Parse(e)) => {
                    loge!("Curve: {} ({}): {}", req.name, req.url, e);
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(&req.name, &e.to_string());
                    }
                    if first_err.is_none() {
                        cancel.store(true, Ordering::Release);
                        logw!("Curve: cancelling remaining detail fetches");
                        first_err = Some(Error::Parse { entity: req.name, source: e });
                    }
                }
                Err(DetailFailure::Fetch(e)) => {
                    logw!("Curve: skipping {}: {}", req.name, e);
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(&req.name, &e.to_string());
                    }
                }
            }
        }
    });

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    match first_err {
        Some(e) => Err(e),
        None => {
            logf!("Curve: collected {} creatures", set.len());
            Ok(set)
        }
    }
}

/// Fetch one detail page and parse every stat line. Stops at the first bad line.
fn fetch_detail(fetcher: &dyn Fetch, req: &DetailRequest) -> Result<Vec<StatLine>, DetailFailure> {
    let page = fetcher.get(&req.url).map_err(DetailFailure::Fetch)?;
    curve::stat_lines(&page.body)
        .iter()
        .map(|l| parse_line(l))
        .collect::<Result<Vec<_>, _>>()
        .map_err(DetailFailure::Parse)
}

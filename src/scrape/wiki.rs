// src/scrape/wiki.rs
// Single-page crawl of the wiki: captioned tables → shapes grouped by caption → records.

use crate::{
    config::ScrapeOptions,
    core::net::Fetch,
    data::RecordSet,
    error::{Error, ParseError, Result},
    progress::Progress,
    specs::wiki,
    table::{merge_table, TableShape},
};

/// Records plus the recoverable problems met on the way
/// (headerless tables, ragged rows).
#[derive(Debug, Default)]
pub struct WikiOutcome {
    pub records: RecordSet,
    pub warnings: Vec<ParseError>,
}

pub fn run(
    opts: &ScrapeOptions,
    fetcher: &dyn Fetch,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<WikiOutcome> {
    let source = &opts.wiki;
    if !source.is_enabled() {
        return Err(Error::SourceDisabled("wiki"));
    }

    logf!("Wiki: fetching {}", source.url);
    let page = fetcher.get(&source.url)?;
    let tables = wiki::parse_tables(&page.body);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(tables.len());
    }

    let mut out = WikiOutcome::default();

    // Group by caption, keeping first-seen order.
    let mut groups: Vec<(String, Vec<TableShape>)> = Vec::new();
    for table in tables {
        match table.shape() {
            Ok(shape) => match groups.iter_mut().find(|(t, _)| *t == table.title) {
                Some((_, shapes)) => shapes.push(shape),
                None => groups.push((table.title, vec![shape])),
            },
            Err(e) => {
                logw!("Wiki: skipping table {:?}: {}", table.title, e);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&table.title, &e.to_string());
                }
                out.warnings.push(e);
            }
        }
    }

    for (title, shapes) in &groups {
        for shape in shapes {
            for w in merge_table(&mut out.records, title, shape) {
                logw!("Wiki: {}", w);
                out.warnings.push(w);
            }
        }
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(title);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!(
        "Wiki: {} categories, {} creatures, {} warnings",
        groups.len(),
        out.records.len(),
        out.warnings.len()
    );
    Ok(out)
}

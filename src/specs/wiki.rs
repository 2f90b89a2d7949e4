// src/specs/wiki.rs
//! Page spec for the wiki: every `<table>` with a non-empty `<caption>` is a stat table.
//! Caption → category, `<th>` cells → headers, `<td>` cells → flat data cells.
//! Uncaptioned tables (layout, navboxes) are skipped.

use crate::core::html::Doc;
use crate::table::TableExtract;

pub fn parse_tables(doc: &str) -> Vec<TableExtract> {
    let doc = Doc::new(doc);
    let mut out = Vec::new();

    for table in doc.elements("table") {
        let inner = table.children();
        let title = inner.first("caption").map(|c| c.clean_text()).unwrap_or_default();
        if title.is_empty() {
            logd!("Wiki: skipping table without caption at byte {}", table.start);
            continue;
        }

        let headers = cell_texts(&inner, "th");
        let cells = cell_texts(&inner, "td");
        out.push(TableExtract { title, headers, cells });
    }
    out
}

/// Cell texts in document order. Rows are found whether or not they sit in
/// `thead`/`tbody`/`tfoot`.
fn cell_texts(table: &Doc<'_>, tag: &str) -> Vec<String> {
    let mut out = Vec::new();
    for row in table.elements("tr") {
        for cell in row.children().elements(tag) {
            out.push(cell.clean_text());
        }
    }
    out
}

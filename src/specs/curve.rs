// src/specs/curve.rs
//! Page spec for the curve-override guide.
//!
//! Index page:
//! - Every creature is a link inside a level-3 heading of the main content:
//!   `<main> … <h3><a href="rex/">Rex</a></h3> … </main>`.
//! - Links are resolved against the index URL; the first anchor for a URL wins.
//!
//! Detail page:
//! - Each stat is one `<span class="line">` inside `<main>` (a highlighted code block).
//!   Nested highlight spans are flattened into the line's text.
//!
//! No fetching, no merging: callers hand in HTML and get names, URLs and raw lines back.

use std::collections::HashSet;

use crate::core::{html::Doc, net::resolve_url};
use crate::error::FetchError;

/// One creature discovered on the index page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailRequest {
    pub name: String,
    pub url: String,
}

/// Main content region, or the whole document when there is no `<main>`.
fn main_region(doc: &str) -> &str {
    Doc::new(doc).first("main").map(|m| m.inner).unwrap_or(doc)
}

/// `main h3 a` → (name, absolute URL), deduped by URL.
pub fn parse_index(doc: &str, base_url: &str) -> Result<Vec<DetailRequest>, FetchError> {
    let main = Doc::new(main_region(doc));
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for h3 in main.elements("h3") {
        let heading = h3.children();
        for a in heading.elements("a") {
            let Some(href) = a.attr("href") else { continue };
            let name = a.clean_text();
            if name.is_empty() || href.trim().is_empty() {
                continue;
            }
            let url = resolve_url(base_url, &href)?;
            if seen.insert(url.clone()) {
                out.push(DetailRequest { name, url });
            }
        }
    }

    logd!("Curve index: {} creature links", out.len());
    Ok(out)
}

/// Text of every `main span.line`, trimmed; blank lines dropped.
pub fn stat_lines(doc: &str) -> Vec<String> {
    let main = Doc::new(main_region(doc));
    let mut lines = Vec::new();
    collect_lines(&main, &mut lines);
    lines
}

fn collect_lines(doc: &Doc<'_>, out: &mut Vec<String>) {
    for span in doc.elements("span") {
        if span.has_class("line") {
            let text = span.text();
            let text = text.trim();
            if !text.is_empty() {
                out.push(s!(text));
            }
        } else {
            // a wrapper span may hold the lines
            collect_lines(&span.children(), out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://guides.example.com/pot/curve-overrides/alderons/";

    #[test]
    fn index_links_come_from_main_h3_only() {
        let doc = r#"
            <html><body>
              <nav><h3><a href="/nav/">Navigation</a></h3></nav>
              <main>
                <h2><a href="ignored/">Not a creature</a></h2>
                <h3 id="rex"><a href="rex/">Tyrannosaurus  Rex</a></h3>
                <h3><a class="anchor" href="https://guides.example.com/pot/trike/">Triceratops</a></h3>
                <h3><a href="rex/">Rex again</a></h3>
                <h3>No link here</h3>
              </main>
            </body></html>
        "#;
        let reqs = parse_index(doc, BASE).unwrap();
        assert_eq!(reqs, vec![
            DetailRequest {
                name: s!("Tyrannosaurus Rex"),
                url: s!("https://guides.example.com/pot/curve-overrides/alderons/rex/"),
            },
            DetailRequest {
                name: s!("Triceratops"),
                url: s!("https://guides.example.com/pot/trike/"),
            },
        ]);
    }

    #[test]
    fn stat_lines_flatten_highlighting_and_decode_quotes() {
        let doc = r#"
            <main>
              <pre><code>
                <span class="line"><span style="color:#f00">Core.HealthPoints</span> &quot;Health&quot; (100,150)</span>
                <span class="line">Bite Force "desc" (50)</span>
                <span class="line">   </span>
              </code></pre>
            </main>
            <footer><span class="line">Footer "x" (1)</span></footer>
        "#;
        let lines = stat_lines(doc);
        assert_eq!(lines, vec![
            r#"Core.HealthPoints "Health" (100,150)"#,
            r#"Bite Force "desc" (50)"#,
        ]);
    }

    #[test]
    fn lines_inside_wrapper_spans_are_found() {
        let doc = r#"<main><span class="code"><span class="line">A "d" (1)</span></span></main>"#;
        assert_eq!(stat_lines(doc), vec![r#"A "d" (1)"#]);
    }
}

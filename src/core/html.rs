// src/core/html.rs
// Case-insensitive element scanning over raw HTML strings.
// Lowercasing is ASCII-only so byte offsets in the lowered copy match the source.

use super::sanitize::{decode_entities, normalize_ws};

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// An HTML string plus its lowered copy, scanned by tag name.
pub struct Doc<'a> {
    src: &'a str,
    lc: String,
}

/// One matched element. Offsets are relative to the `Doc` it came from.
#[derive(Clone, Copy, Debug)]
pub struct Element<'a> {
    /// Opening tag, `<td class="x">`.
    pub open: &'a str,
    /// Everything between the opening and the matching closing tag.
    pub inner: &'a str,
    pub start: usize,
    pub end: usize,
}

impl<'a> Doc<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, lc: to_lower(src) }
    }

    pub fn as_str(&self) -> &'a str {
        self.src
    }

    /// Next `<tag ...>...</tag>` starting at or after `from`.
    /// Nested elements of the same tag are balanced; an unclosed element runs to the end.
    pub fn next_element(&self, tag: &str, from: usize) -> Option<Element<'a>> {
        let tag = to_lower(tag);
        let start = self.find_open(&tag, from)?;
        let open_end = tag_end(self.src, start)?;
        let open = &self.src[start..open_end];

        if open.ends_with("/>") {
            return Some(Element { open, inner: "", start, end: open_end });
        }

        let mut depth = 1usize;
        let mut pos = open_end;
        loop {
            let next_open = self.find_open(&tag, pos);
            let next_close = self.find_close(&tag, pos);
            match (next_open, next_close) {
                (Some(o), Some(c)) if o < c => {
                    let oe = tag_end(self.src, o)?;
                    if !self.src[o..oe].ends_with("/>") { depth += 1; }
                    pos = oe;
                }
                (_, Some(c)) => {
                    let ce = self.src[c..].find('>').map(|i| c + i + 1).unwrap_or(self.src.len());
                    depth -= 1;
                    if depth == 0 {
                        return Some(Element { open, inner: &self.src[open_end..c], start, end: ce });
                    }
                    pos = ce;
                }
                (_, None) => {
                    let n = self.src.len();
                    return Some(Element { open, inner: &self.src[open_end..n], start, end: n });
                }
            }
        }
    }

    /// All top-level `tag` elements in document order.
    pub fn elements<'d>(&'d self, tag: &'d str) -> Elements<'a, 'd> {
        Elements { doc: self, tag, pos: 0 }
    }

    /// First `tag` element, if any.
    pub fn first(&self, tag: &str) -> Option<Element<'a>> {
        self.next_element(tag, 0)
    }

    fn find_open(&self, tag: &str, from: usize) -> Option<usize> {
        let mut pos = from;
        loop {
            let rel = self.lc.get(pos..)?.find('<')?;
            let at = pos + rel;
            let after = &self.lc[at + 1..];
            if after.starts_with(tag) && is_boundary(after.as_bytes().get(tag.len())) {
                return Some(at);
            }
            pos = at + 1;
        }
    }

    fn find_close(&self, tag: &str, from: usize) -> Option<usize> {
        let mut pos = from;
        loop {
            let rel = self.lc.get(pos..)?.find("</")?;
            let at = pos + rel;
            let after = &self.lc[at + 2..];
            if after.starts_with(tag) && is_boundary(after.as_bytes().get(tag.len())) {
                return Some(at);
            }
            pos = at + 2;
        }
    }
}

pub struct Elements<'a, 'd> {
    doc: &'d Doc<'a>,
    tag: &'d str,
    pos: usize,
}

impl<'a, 'd> Iterator for Elements<'a, 'd> {
    type Item = Element<'a>;
    fn next(&mut self) -> Option<Self::Item> {
        let el = self.doc.next_element(self.tag, self.pos)?;
        self.pos = el.end.max(el.start + 1);
        Some(el)
    }
}

impl<'a> Element<'a> {
    /// Attribute value from the opening tag, entity-decoded.
    pub fn attr(&self, name: &str) -> Option<String> {
        attr_value(self.open, name)
    }

    /// True if the `class` attribute lists `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .map(|v| v.split_ascii_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Text content: tags removed, entities decoded, whitespace kept.
    pub fn text(&self) -> String {
        decode_entities(&strip_tags_raw(self.inner))
    }

    /// Text content with whitespace collapsed and trimmed.
    pub fn clean_text(&self) -> String {
        normalize_ws(&self.text())
    }

    /// A scanner over this element's inner HTML.
    pub fn children(&self) -> Doc<'a> {
        Doc::new(self.inner)
    }
}

/// Position just past the `>` closing the tag that opens at `start`. Quoted `>` are skipped.
fn tag_end(s: &str, start: usize) -> Option<usize> {
    let b = s.as_bytes();
    let mut i = start + 1;
    let mut in_s = false; // '
    let mut in_d = false; // "
    while i < b.len() {
        match b[i] {
            b'\'' if !in_d => in_s = !in_s,
            b'"' if !in_s => in_d = !in_d,
            b'>' if !in_s && !in_d => return Some(i + 1),
            _ => {}
        }
        i += 1;
    }
    None
}

fn is_boundary(b: Option<&u8>) -> bool {
    matches!(b, Some(b' ' | b'\t' | b'\r' | b'\n' | b'>' | b'/'))
}

/// Extract `name=value` from an opening tag. Handles double, single and unquoted values.
/// Attributes are walked in order, so text inside another attribute's quoted value never matches.
/// A bare attribute (`<td nowrap>`) yields an empty string.
pub fn attr_value(open_tag: &str, name: &str) -> Option<String> {
    let body = open_tag.strip_prefix('<').unwrap_or(open_tag);
    // tag name
    let mut rest = body.trim_start_matches(|c: char| !c.is_ascii_whitespace() && c != '>' && c != '/');

    loop {
        rest = rest.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '/');
        if rest.is_empty() || rest.starts_with('>') {
            return None;
        }

        let name_end = rest
            .find(|c: char| c.is_ascii_whitespace() || matches!(c, '=' | '>' | '/'))
            .unwrap_or(rest.len());
        let attr = &rest[..name_end];
        rest = rest[name_end..].trim_start();

        let mut value = "";
        if let Some(after) = rest.strip_prefix('=') {
            let v = after.trim_start();
            let (raw, tail) = match v.as_bytes().first() {
                Some(&q @ (b'"' | b'\'')) => {
                    let quoted = &v[1..];
                    match quoted.find(q as char) {
                        Some(i) => (&quoted[..i], &quoted[i + 1..]),
                        None => (quoted, ""),
                    }
                }
                _ => {
                    let end = v
                        .find(|c: char| c.is_ascii_whitespace() || c == '>')
                        .unwrap_or(v.len());
                    (&v[..end], &v[end..])
                }
            };
            value = raw;
            rest = tail;
        }

        if attr.eq_ignore_ascii_case(name) {
            return Some(decode_entities(value));
        }
    }
}

/// Remove every `<...>` tag, leaving text untouched.
pub fn strip_tags_raw(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Remove tags and collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    normalize_ws(&strip_tags_raw(s.as_ref()))
}

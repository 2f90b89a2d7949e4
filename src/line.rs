// src/line.rs
//! Stat line grammar for curve-override pages.
//!
//! A line looks like
//!
//! ```text
//! Core.HealthPoints "Health per growth stage" (100,150,200,250,300)
//! ```
//!
//! Everything before the first `"` is the key. The value is the content of the first
//! `(...)` group after that quote, verbatim. A dotted key splits on its first `.` into
//! category and stat; an undotted key lands in [`DEFAULT_CATEGORY`].

use crate::data::{StatLine, DEFAULT_CATEGORY};
use crate::error::ParseError;

pub fn parse_line(text: &str) -> Result<StatLine, ParseError> {
    let (key, after_key) = text
        .split_once('"')
        .ok_or_else(|| ParseError::MalformedLine(s!(text.trim())))?;

    let value = first_group(after_key)
        .ok_or_else(|| ParseError::MissingValueGroup(s!(text.trim())))?;

    let key = key.trim();
    let (category, stat) = match key.split_once('.') {
        Some((cat, stat)) => (cat.trim(), stat.trim()),
        None => (DEFAULT_CATEGORY, key),
    };

    Ok(StatLine { category: s!(category), stat: s!(stat), value: s!(value) })
}

/// Content of the leftmost `(` ... `)` pair with at least one character between,
/// where the content runs up to the first `)`.
fn first_group(s: &str) -> Option<&str> {
    let mut from = 0usize;
    while let Some(rel) = s[from..].find('(') {
        let open = from + rel;
        // no ')' after this '(' means none after any later '(' either
        let close = open + 1 + s[open + 1..].find(')')?;
        if close > open + 1 {
            return Some(&s[open + 1..close]);
        }
        from = open + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_key_splits_into_category() {
        let l = parse_line(r#"Core.HealthPoints "desc" (100,150,200,250,300)"#).unwrap();
        assert_eq!(l.category, "Core");
        assert_eq!(l.stat, "HealthPoints");
        assert_eq!(l.value, "100,150,200,250,300");
    }

    #[test]
    fn undotted_key_defaults_to_combat() {
        let l = parse_line(r#"Bite Force "desc" (50)"#).unwrap();
        assert_eq!(l.category, "Combat");
        assert_eq!(l.stat, "Bite Force");
        assert_eq!(l.value, "50");
    }

    #[test]
    fn splits_on_first_dot_only() {
        let l = parse_line(r#"Multiplier.Bleed.Resist "x" (0.5, 0.75)"#).unwrap();
        assert_eq!(l.category, "Multiplier");
        assert_eq!(l.stat, "Bleed.Resist");
        assert_eq!(l.value, "0.5, 0.75");
    }

    #[test]
    fn value_inside_quoted_section_is_found() {
        let l = parse_line(r#"Core.Speed "(5,6,7)""#).unwrap();
        assert_eq!(l.value, "5,6,7");
    }

    #[test]
    fn empty_group_is_skipped() {
        let l = parse_line(r#"Core.Speed "()" (9)"#).unwrap();
        assert_eq!(l.value, "9");
    }

    #[test]
    fn no_quote_is_malformed() {
        let err = parse_line("Core.Speed (5,6,7)").unwrap_err();
        assert_eq!(err.kind(), "malformed-line");
    }

    #[test]
    fn no_group_is_missing_value() {
        let err = parse_line(r#"Core.Speed "desc" 5,6,7"#).unwrap_err();
        assert_eq!(err.kind(), "missing-value-group");
        let err = parse_line(r#"Core.Speed "desc" ()"#).unwrap_err();
        assert_eq!(err.kind(), "missing-value-group");
    }

    #[test]
    fn group_before_quote_does_not_count() {
        let err = parse_line(r#"Core.Speed (5) "desc""#).unwrap_err();
        assert_eq!(err.kind(), "missing-value-group");
    }
}

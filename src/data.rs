// src/data.rs
//
// Canonical record shapes.
//
// - Entity: one creature, keyed by display name, with a category → stat → value map.
// - RecordSet: name → Entity. Built fresh by one scrape run; mutated only through `merge`.
//
// Values are opaque text (usually a comma-separated per-growth-stage list); nothing here
// parses them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// stat name → value
pub type StatMap = BTreeMap<String, String>;

/// category → stats
pub type Stats = BTreeMap<String, StatMap>;

/// Category used for curve-source keys without a `Category.` prefix.
pub const DEFAULT_CATEGORY: &str = "Combat";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    /// Detail page; empty for sources without per-entity pages.
    #[serde(default)]
    pub url: String,
    pub stats: Stats,
}

impl Entity {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self { name: name.into(), url: url.into(), stats: Stats::new() }
    }

    pub fn stat(&self, category: &str, stat: &str) -> Option<&str> {
        self.stats.get(category)?.get(stat).map(String::as_str)
    }

    /// Number of (category, stat) pairs.
    pub fn stat_count(&self) -> usize {
        self.stats.values().map(BTreeMap::len).sum()
    }
}

/// A parsed `(category, stat, value)` triple.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatLine {
    pub category: String,
    pub stat: String,
    pub value: String,
}

/// Entity name → record. Serializes as a plain JSON object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet {
    pub entities: BTreeMap<String, Entity>,
}

impl RecordSet {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.entities.len() }
    pub fn is_empty(&self) -> bool { self.entities.is_empty() }

    pub fn get(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Entity)> {
        self.entities.iter()
    }

    /// Upsert one value.
    /// Creates the entity (with `url`) and the category on first sight;
    /// an existing non-empty URL is never replaced. Last write wins per stat.
    pub fn merge(&mut self, entity: &str, url: &str, category: &str, stat: &str, value: &str) {
        let rec = self
            .entities
            .entry(s!(entity))
            .or_insert_with(|| Entity::new(entity, url));
        if rec.url.is_empty() && !url.is_empty() {
            rec.url = s!(url);
        }
        rec.stats
            .entry(s!(category))
            .or_default()
            .insert(s!(stat), s!(value));
    }

    pub fn merge_line(&mut self, entity: &str, url: &str, line: &StatLine) {
        self.merge(entity, url, &line.category, &line.stat, &line.value);
    }

    /// Make sure `entity` exists even if it contributed no stats.
    pub fn touch(&mut self, entity: &str, url: &str) {
        let rec = self
            .entities
            .entry(s!(entity))
            .or_insert_with(|| Entity::new(entity, url));
        if rec.url.is_empty() && !url.is_empty() {
            rec.url = s!(url);
        }
    }
}

impl FromIterator<Entity> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        Self { entities: iter.into_iter().map(|e| (e.name.clone(), e)).collect() }
    }
}

impl IntoIterator for RecordSet {
    type Item = (String, Entity);
    type IntoIter = std::collections::btree_map::IntoIter<String, Entity>;
    fn into_iter(self) -> Self::IntoIter {
        self.entities.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_creates_then_overwrites() {
        let mut set = RecordSet::new();
        set.merge("Rex", "https://x/rex", "Core", "Speed", "1,2");
        set.merge("Rex", "", "Core", "Speed", "3,4");
        set.merge("Rex", "", "Combat", "Bite", "50");

        let rex = set.get("Rex").unwrap();
        assert_eq!(rex.url, "https://x/rex");
        assert_eq!(rex.stat("Core", "Speed"), Some("3,4"));
        assert_eq!(rex.stat("Combat", "Bite"), Some("50"));
        assert_eq!(rex.stat_count(), 2);
    }

    #[test]
    fn url_is_set_once() {
        let mut set = RecordSet::new();
        set.merge("Trike", "", "Health", "Adult", "80");
        assert_eq!(set.get("Trike").unwrap().url, "");
        set.merge("Trike", "https://x/trike", "Health", "Adult", "80");
        set.merge("Trike", "https://y/other", "Health", "Adult", "80");
        assert_eq!(set.get("Trike").unwrap().url, "https://x/trike");
    }

    #[test]
    fn merge_is_idempotent_and_order_independent_across_entities() {
        let ops = [
            ("Rex", "Core", "Speed", "5"),
            ("Trike", "Core", "Speed", "3"),
            ("Rex", "Combat", "Bite", "50"),
        ];
        let mut a = RecordSet::new();
        for (e, c, s, v) in ops { a.merge(e, "", c, s, v); }
        let mut b = RecordSet::new();
        for (e, c, s, v) in ops.iter().rev() { b.merge(e, "", c, s, v); }
        assert_eq!(a, b);

        let before = a.clone();
        for (e, c, s, v) in ops { a.merge(e, "", c, s, v); }
        assert_eq!(a, before);
    }
}

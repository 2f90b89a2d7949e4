// src/query.rs
//! Filters over a loaded `RecordSet`. Every filter is pure and returns a new set.
//!
//! `Query::apply` runs them in a fixed order: name, then stat, then category.

use std::collections::BTreeSet;
use std::fmt;

use crate::data::{RecordSet, StatMap, Stats};

/// The curve source's fixed categories, selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Combat,
    Core,
    Multiplier,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Combat => "Combat",
            Category::Core => "Core",
            Category::Multiplier => "Multiplier",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keep entities whose name contains `query`, case-insensitively.
pub fn filter_by_name(query: &str, set: &RecordSet) -> RecordSet {
    let q = query.to_lowercase();
    set.iter()
        .filter(|(name, _)| name.to_lowercase().contains(&q))
        .map(|(_, e)| e.clone())
        .collect()
}

/// Keep only `(category, stat)` pairs whose `"<category>.<stat>"` contains `query`,
/// case-insensitively. Entities left with no pairs are dropped.
pub fn filter_by_stat(query: &str, set: &RecordSet) -> RecordSet {
    let q = query.to_lowercase();
    let mut out = RecordSet::new();

    for (name, entity) in set.iter() {
        let mut kept = Stats::new();
        for (cat, stats) in &entity.stats {
            let matched: StatMap = stats
                .iter()
                .filter(|(stat, _)| join!(cat, ".", stat).to_lowercase().contains(&q))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            if !matched.is_empty() {
                kept.insert(cat.clone(), matched);
            }
        }
        if !kept.is_empty() {
            let mut e = entity.clone();
            e.stats = kept;
            out.entities.insert(name.clone(), e);
        }
    }
    out
}

/// Drop categories not in `selected`. An empty selection keeps everything.
pub fn filter_by_category(selected: &BTreeSet<Category>, set: &RecordSet) -> RecordSet {
    if selected.is_empty() {
        return set.clone();
    }
    let keep: BTreeSet<&str> = selected.iter().map(Category::as_str).collect();
    let mut out = set.clone();
    for entity in out.entities.values_mut() {
        entity.stats.retain(|cat, _| keep.contains(cat.as_str()));
    }
    out
}

/// A `find` request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pub name: String,
    pub stat: Option<String>,
    pub categories: BTreeSet<Category>,
}

impl Query {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn with_stat(mut self, stat: impl Into<String>) -> Self {
        self.stat = Some(stat.into());
        self
    }

    pub fn with_category(mut self, cat: Category) -> Self {
        self.categories.insert(cat);
        self
    }

    pub fn apply(&self, set: &RecordSet) -> RecordSet {
        let mut out = filter_by_name(&self.name, set);
        if let Some(stat) = &self.stat {
            out = filter_by_stat(stat, &out);
        }
        filter_by_category(&self.categories, &out)
    }
}

// tests/query_props.rs
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use dino_stats::query::{filter_by_category, filter_by_name, filter_by_stat, Category, Query};
use dino_stats::{runner, store, RecordSet};

fn records() -> RecordSet {
    let mut set = RecordSet::new();
    set.merge("Rex", "u/rex", "Core", "Speed", "5,6,7,8,9");
    set.merge("Rex", "u/rex", "Core", "HealthPoints", "100");
    set.merge("Rex", "u/rex", "Combat", "Bite", "50");
    set.merge("Trike", "u/trike", "Multiplier", "SpeedMultiplier", "1.1");
    set.merge("Pteranodon", "u/ptera", "Combat", "Peck", "10");
    set
}

#[test]
fn empty_category_selection_is_identity() {
    let set = records();
    assert_eq!(filter_by_category(&BTreeSet::new(), &set), set);
}

#[test]
fn stat_filter_is_idempotent() {
    let once = filter_by_stat("speed", &records());
    assert_eq!(filter_by_stat("speed", &once), once);
}

#[test]
fn name_and_stat_filters_commute() {
    let set = records();
    let a = filter_by_stat("speed", &filter_by_name("r", &set));
    let b = filter_by_name("r", &filter_by_stat("speed", &set));
    assert_eq!(a, b);
}

#[test]
fn filters_never_add_records() {
    let set = records();
    for q in ["", "rex", "x", "zzz"] {
        let out = filter_by_name(q, &set);
        assert!(out.iter().all(|(k, e)| set.get(k) == Some(e)));
    }
}

#[test]
fn rex_speed_end_to_end() {
    let mut set = RecordSet::new();
    set.merge("Rex", "", "Core", "Speed", "5,6,7,8,9");

    assert_eq!(filter_by_stat("speed", &set), set);
    assert!(filter_by_stat("nomatch", &set).is_empty());

    let out = Query::new("rex").with_stat("speed").apply(&set);
    assert_eq!(out, set);

    let out = Query::new("rex").with_stat("speed").with_category(Category::Combat).apply(&set);
    assert_eq!(out.get("Rex").unwrap().stats.len(), 0);

    assert!(Query::new("nomatch").apply(&set).is_empty());
}

#[test]
fn run_find_reads_the_store() {
    let mut dir = std::env::temp_dir();
    dir.push("dino_stats_query_find");
    let _ = fs::remove_dir_all(&dir);
    let path: PathBuf = dir.join("dinos.json");
    store::save(&records(), &path).unwrap();

    let out = runner::run_find(&path, &Query::new("TRIKE")).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out.get("Trike").unwrap().url, "u/trike");

    let rendered = runner::render(&out);
    assert!(rendered.starts_with("{\n  \"Trike\""));
}

#[test]
fn run_find_without_store_fails() {
    let path = std::env::temp_dir().join("dino_stats_query_none").join("missing.json");
    assert!(runner::run_find(&path, &Query::new("rex")).is_err());
}

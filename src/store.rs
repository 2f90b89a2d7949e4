// src/store.rs
// On-disk record files: one JSON object per source, keyed by creature name.
// Saving always replaces the whole file.

use std::{
    fs,
    io::{BufWriter, Write},
    path::Path,
};

use crate::data::RecordSet;
use crate::error::StoreError;

pub fn save(set: &RecordSet, path: &Path) -> Result<(), StoreError> {
    let io_err = |source: std::io::Error| StoreError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let file = fs::File::create(path).map_err(io_err)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    serde_json::to_writer(&mut out, set).map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    out.flush().map_err(io_err)?;

    logf!("Saved {} creatures to {}", set.len(), path.display());
    Ok(())
}

pub fn load(path: &Path) -> Result<RecordSet, StoreError> {
    let bytes = fs::read(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let set = parse(&bytes).map_err(|reason| StoreError::Format {
        path: path.to_path_buf(),
        reason,
    })?;
    logd!("Loaded {} creatures from {}", set.len(), path.display());
    Ok(set)
}

/// Decode and check a record file body. Invalid UTF-8 is a format problem too.
fn parse(bytes: &[u8]) -> Result<RecordSet, String> {
    let set: RecordSet = serde_json::from_slice(bytes).map_err(|e| e.to_string())?;
    for (key, entity) in set.iter() {
        if *key != entity.name {
            return Err(format!("key {key:?} holds record named {:?}", entity.name));
        }
    }
    Ok(set)
}

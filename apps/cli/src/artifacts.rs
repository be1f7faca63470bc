//! Timestamped JSON artifacts. Stage 1 writes the full ranked set and a
//! recommended subset; stage 2 reads the latest recommended file (names
//! embed an ISO timestamp, so lexicographic order is chronological) and
//! writes proposals.

use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::record::TunedRecord;

pub const RECOMMENDED_PREFIX: &str = "results-recommended-";

/// Filesystem-safe UTC timestamp for artifact names.
pub fn timestamp() -> String {
    Utc::now()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    Ok(())
}

pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn load_records(path: &Path) -> Result<Vec<TunedRecord>, AppError> {
    load_json(path)
}

/// Finds the newest `results-recommended-*.json` in `dir` by name.
pub fn latest_recommended(dir: &Path) -> Result<Option<PathBuf>, AppError> {
    let mut names: Vec<String> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.starts_with(RECOMMENDED_PREFIX) && name.ends_with(".json"))
        .collect();
    names.sort();
    Ok(names.pop().map(|name| dir.join(name)))
}

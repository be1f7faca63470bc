//! Persisted set of already-processed listing ids. Keeps the classifier
//! from re-spending calls on listings it has already judged.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::errors::AppError;

pub const SEEN_FILE: &str = "seen-projects.json";

#[derive(Debug)]
pub struct SeenSet {
    path: PathBuf,
    ids: HashSet<String>,
}

impl SeenSet {
    /// Loads the persisted set. A missing or corrupt file yields an empty
    /// set — losing history is annoying, aborting the run over it is worse.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let ids = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(list) => list.into_iter().collect(),
                Err(e) => {
                    warn!("Ignoring corrupt seen file {}: {e}", path.display());
                    HashSet::new()
                }
            },
            Err(_) => HashSet::new(),
        };
        Self { path, ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn insert(&mut self, id: &str) {
        self.ids.insert(id.to_string());
    }

    /// Overwrites the persisted file with the current membership. Called
    /// once at the end of a successful run; order on disk is irrelevant but
    /// kept sorted so diffs stay readable.
    pub fn save(&self) -> Result<(), AppError> {
        let mut list: Vec<&String> = self.ids.iter().collect();
        list.sort();
        let json = serde_json::to_string_pretty(&list)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

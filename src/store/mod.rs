//! Persisted visit history and age computation.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// On-disk document version understood by this build.
const FORMAT_VERSION: u32 = 1;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("visit store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("visit store version {0} is newer than supported version {FORMAT_VERSION}")]
    UnsupportedVersion(u32),
}

/// Versioned on-disk shape of the visit history.
#[derive(Debug, Serialize, Deserialize)]
struct StoreDocument {
    version: u32,
    visits: Vec<VisitEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct VisitEntry {
    note: String,
    last_visit: DateTime<Utc>,
}

/// Mapping from note name to the moment it was last opened for review.
///
/// Held in memory for the duration of a run; [`load`](Self::load) and
/// [`save`](Self::save) round-trip it through a JSON file next to the
/// notes. There is no locking: two concurrent runs over the same store
/// race on `save` and the later one wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisitStore {
    visits: BTreeMap<String, DateTime<Utc>>,
}

impl VisitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the store from `path`.
    ///
    /// A missing file is not an error: an empty store is written there so
    /// later runs find a canonical file, and returned. An unreadable or
    /// malformed file is fatal — visit history is never silently dropped.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.is_file() {
            log::warn!(
                "no visit store found at {}, starting a new one",
                path.display()
            );
            let store = Self::new();
            store.save(path)?;
            return Ok(store);
        }

        let raw = fs::read_to_string(path)?;
        let doc: StoreDocument = serde_json::from_str(&raw)?;
        if doc.version != FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion(doc.version));
        }

        let visits = doc
            .visits
            .into_iter()
            .map(|entry| (entry.note, entry.last_visit))
            .collect();
        Ok(Self { visits })
    }

    /// Writes the store to `path`, replacing any prior content.
    ///
    /// Goes through a named temp file in the same directory plus rename,
    /// so a crash mid-write leaves the previous file intact.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let doc = StoreDocument {
            version: FORMAT_VERSION,
            visits: self
                .visits
                .iter()
                .map(|(note, last_visit)| VisitEntry {
                    note: note.clone(),
                    last_visit: *last_visit,
                })
                .collect(),
        };
        let encoded = serde_json::to_vec_pretty(&doc)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(&encoded)?;
        tmp.persist(path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }

    /// Whole minutes elapsed since each known note's last visit, as of
    /// `now`. The caller reads the clock once per run and passes it in.
    pub fn ages_in_minutes(&self, now: DateTime<Utc>) -> BTreeMap<String, i64> {
        self.visits
            .iter()
            .map(|(note, last_visit)| {
                let minutes = (now - *last_visit).num_seconds().div_euclid(60);
                (note.clone(), minutes)
            })
            .collect()
    }

    /// Stamps `now` as the last visit of every note in `notes`.
    pub fn record_visits<'a, I>(&mut self, notes: I, now: DateTime<Utc>)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for note in notes {
            self.visits.insert(note.to_owned(), now);
        }
    }

    /// Drops entries for notes that are no longer present, so deleted
    /// files stop influencing future runs and are not re-persisted.
    pub fn retain_notes(&mut self, current: &[String]) {
        let current: HashSet<&str> = current.iter().map(String::as_str).collect();
        self.visits.retain(|note, _| current.contains(note.as_str()));
    }

    pub fn last_visit(&self, note: &str) -> Option<DateTime<Utc>> {
        self.visits.get(note).copied()
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }
}

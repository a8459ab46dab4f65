//! One review run over a note collection.

use std::io;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use rand::Rng;
use thiserror::Error;

use crate::reconcile::{age_vector, NoteAge};
use crate::sampling::draw::{sample_without_replacement, SampleError};
use crate::sampling::weights::{selection_probabilities, WeightPolicy};
use crate::scan::list_notes;
use crate::store::{StoreError, VisitStore};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Sample(#[from] SampleError),
}

/// Where the notes live and what counts as a note.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Folder containing the note files.
    pub folder: PathBuf,
    /// Store file name, resolved inside `folder`.
    pub store_name: String,
    /// File suffixes considered notes, with the leading dot.
    pub suffixes: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            folder: PathBuf::from("."),
            store_name: "notewarmer.json".to_owned(),
            suffixes: vec![".md".to_owned()],
        }
    }
}

/// A single run: scan the folder, reconcile ages, pick notes, and commit
/// the visits once the caller has opened them.
///
/// The clock is read once by the caller and passed in, so every age in
/// the run is computed against the same instant.
pub struct ReviewSession {
    store: VisitStore,
    store_path: PathBuf,
    notes: Vec<String>,
    ages: Vec<NoteAge>,
}

impl ReviewSession {
    /// Scans the folder and loads the visit history as of `now`.
    pub fn begin(config: &SessionConfig, now: DateTime<Utc>) -> Result<Self, SessionError> {
        let store_path = config.folder.join(&config.store_name);
        let suffixes: Vec<&str> = config.suffixes.iter().map(String::as_str).collect();

        let notes = list_notes(&config.folder, &suffixes)?;
        let store = VisitStore::load(&store_path)?;
        let ages = age_vector(&notes, &store.ages_in_minutes(now));
        log::debug!(
            "{} notes under {}, {} with a recorded visit",
            notes.len(),
            config.folder.display(),
            store.len()
        );

        Ok(Self {
            store,
            store_path,
            notes,
            ages,
        })
    }

    /// Every current note, in the deterministic scan order.
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Age of every current note, aligned with [`notes`](Self::notes).
    /// Exposed for callers that render their own visualization.
    pub fn ages(&self) -> &[NoteAge] {
        &self.ages
    }

    /// Picks up to `k` notes for review, biased toward the oldest.
    pub fn pick<R: Rng + ?Sized>(
        &self,
        k: usize,
        policy: WeightPolicy,
        rng: &mut R,
    ) -> Result<Vec<String>, SessionError> {
        let probabilities = selection_probabilities(&self.ages, policy);
        let picked = sample_without_replacement(&self.notes, &probabilities, k, rng)?;
        Ok(picked)
    }

    /// Records `now` as the last visit of every note in `visited`, prunes
    /// entries for notes that no longer exist, and persists the store.
    pub fn commit(&mut self, visited: &[String], now: DateTime<Utc>) -> Result<(), SessionError> {
        self.store
            .record_visits(visited.iter().map(String::as_str), now);
        self.store.retain_notes(&self.notes);
        self.store.save(&self.store_path)?;
        log::info!("recorded visits to {} notes", visited.len());
        Ok(())
    }
}

//! Merges the persisted age map with the current directory listing.

use std::collections::BTreeMap;

/// Sentinel age for a collection in which no note was ever visited.
///
/// Remapped to zero when weights are computed; it never reaches a log or
/// power evaluation.
pub const NEVER_VISITED: i64 = -1;

/// A note paired with its age in whole minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteAge {
    pub note: String,
    pub age_minutes: i64,
}

/// Builds the age vector for `current_notes`, aligned 1:1 with its order.
///
/// A note without a recorded visit gets the oldest age found among the
/// current notes — old enough to surface for review promptly, but not
/// infinitely old. If nothing was ever visited, every note gets
/// [`NEVER_VISITED`]. Ages recorded for notes that are no longer on disk
/// are ignored entirely.
pub fn age_vector(current_notes: &[String], known_ages: &BTreeMap<String, i64>) -> Vec<NoteAge> {
    let default_age = current_notes
        .iter()
        .filter_map(|note| known_ages.get(note))
        .copied()
        .max()
        .unwrap_or(NEVER_VISITED);

    current_notes
        .iter()
        .map(|note| NoteAge {
            note: note.clone(),
            age_minutes: known_ages.get(note).copied().unwrap_or(default_age),
        })
        .collect()
}

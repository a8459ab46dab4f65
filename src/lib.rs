//! Age-weighted revisiting of note files.
//!
//! Keeps a small persisted history of when each note in a folder was last
//! opened for review, turns those ages into a selection distribution, and
//! draws a handful of notes without replacement, biased toward the ones
//! that have waited longest. Opening the files, prompting the user, and
//! rendering any visualization are left to the caller.
//!
//! A typical run:
//!
//! ```no_run
//! use chrono::Utc;
//! use notewarmer::{ReviewSession, SessionConfig, WeightPolicy};
//!
//! # fn main() -> Result<(), notewarmer::SessionError> {
//! let now = Utc::now();
//! let mut session = ReviewSession::begin(&SessionConfig::default(), now)?;
//! let picked = session.pick(5, WeightPolicy::Quadratic, &mut rand::thread_rng())?;
//! // ... open the picked notes ...
//! session.commit(&picked, now)?;
//! # Ok(())
//! # }
//! ```

pub mod reconcile;
pub mod sampling;
pub mod scan;
pub mod session;
pub mod store;

pub use reconcile::{age_vector, NoteAge, NEVER_VISITED};
pub use sampling::draw::{sample_without_replacement, SampleError};
pub use sampling::weights::{selection_probabilities, PolicyParseError, WeightPolicy};
pub use session::{ReviewSession, SessionConfig, SessionError};
pub use store::{StoreError, VisitStore};

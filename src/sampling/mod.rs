//! Turning ages into a selection distribution and drawing from it.

pub mod draw;
pub mod weights;

pub use draw::{sample_without_replacement, SampleError};
pub use weights::{selection_probabilities, PolicyParseError, WeightPolicy};

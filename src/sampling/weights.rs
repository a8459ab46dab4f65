use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::reconcile::NoteAge;

#[derive(Error, Debug)]
#[error("unknown weighting policy: {0}")]
pub struct PolicyParseError(pub String);

/// How strongly a note's age biases its selection chance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightPolicy {
    /// A note twice as old as another is twice as likely to be picked.
    Linear,
    /// A note twice as old is four times as likely. Works through the
    /// oldest notes fastest.
    #[default]
    Quadratic,
    /// A note twice as old is only slightly more likely. Close to a
    /// uniform pick, except for fresh notes.
    Log,
}

impl WeightPolicy {
    /// Unnormalized weight of a single note.
    fn weight(self, age_minutes: i64) -> f64 {
        // The "never visited" sentinel and any clock-skewed negative age
        // count as age zero.
        let age = age_minutes.max(0) as f64;
        match self {
            WeightPolicy::Linear => age,
            WeightPolicy::Quadratic => age * age,
            WeightPolicy::Log => (age + 1.0).ln(),
        }
    }
}

impl FromStr for WeightPolicy {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(WeightPolicy::Linear),
            "quadratic" => Ok(WeightPolicy::Quadratic),
            "log" => Ok(WeightPolicy::Log),
            other => Err(PolicyParseError(other.to_owned())),
        }
    }
}

impl fmt::Display for WeightPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WeightPolicy::Linear => "linear",
            WeightPolicy::Quadratic => "quadratic",
            WeightPolicy::Log => "log",
        };
        f.write_str(name)
    }
}

/// Returns one selection probability per note, summing to 1.
///
/// When every weight is zero (a collection visited moments ago, or a
/// single note at age zero) the distribution degenerates to uniform
/// instead of dividing by zero — NaN never leaves this function.
pub fn selection_probabilities(ages: &[NoteAge], policy: WeightPolicy) -> Vec<f64> {
    if ages.is_empty() {
        return Vec::new();
    }

    let weights: Vec<f64> = ages
        .iter()
        .map(|age| policy.weight(age.age_minutes))
        .collect();
    let total: f64 = weights.iter().sum();

    if total == 0.0 {
        log::debug!("all {} weights are zero, falling back to uniform", weights.len());
        return vec![1.0 / weights.len() as f64; weights.len()];
    }

    weights.into_iter().map(|w| w / total).collect()
}

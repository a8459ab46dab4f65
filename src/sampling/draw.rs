use rand::Rng;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleError {
    #[error("invalid distribution: {0}")]
    InvalidDistribution(String),
}

/// Draws up to `k` distinct notes, biased by `probabilities`.
///
/// Weighted sampling without replacement: each draw removes the selected
/// note and the remaining mass is implicitly renormalized. Requesting more
/// notes than exist returns every note; an empty collection yields an
/// empty sample. A malformed distribution (length mismatch, negative or
/// non-finite entries, non-positive total) is rejected up front — the
/// weighting stage never produces one, so hitting that error means a bug
/// upstream.
pub fn sample_without_replacement<R: Rng + ?Sized>(
    notes: &[String],
    probabilities: &[f64],
    k: usize,
    rng: &mut R,
) -> Result<Vec<String>, SampleError> {
    if notes.len() != probabilities.len() {
        return Err(SampleError::InvalidDistribution(format!(
            "{} notes but {} probabilities",
            notes.len(),
            probabilities.len()
        )));
    }
    if probabilities.iter().any(|p| !p.is_finite() || *p < 0.0) {
        return Err(SampleError::InvalidDistribution(
            "negative or non-finite probability".to_owned(),
        ));
    }

    if notes.is_empty() {
        return Ok(Vec::new());
    }

    let mut total: f64 = probabilities.iter().sum();
    if total <= 0.0 {
        return Err(SampleError::InvalidDistribution(
            "probabilities do not sum to a positive number".to_owned(),
        ));
    }

    let mut remaining: Vec<(usize, f64)> = probabilities.iter().copied().enumerate().collect();
    let k = k.min(notes.len());
    let mut picked = Vec::with_capacity(k);

    for _ in 0..k {
        let slot = if total > 0.0 {
            pick_weighted(&remaining, total, rng)
        } else {
            // Every surviving note has zero weight: continue uniformly,
            // mirroring the weighting stage's degenerate fallback.
            rng.gen_range(0..remaining.len())
        };

        let (note_index, weight) = remaining.swap_remove(slot);
        total -= weight;
        picked.push(notes[note_index].clone());
    }

    Ok(picked)
}

/// Index into `remaining` of a single weighted draw.
fn pick_weighted<R: Rng + ?Sized>(remaining: &[(usize, f64)], total: f64, rng: &mut R) -> usize {
    let mut target = rng.gen::<f64>() * total;
    for (slot, &(_, weight)) in remaining.iter().enumerate() {
        if target < weight {
            return slot;
        }
        target -= weight;
    }
    // Floating-point residue can walk past the end; settle on the last slot.
    remaining.len() - 1
}

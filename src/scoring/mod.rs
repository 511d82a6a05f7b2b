// Virality scoring
// Converts assigned tag names into a 0-100 integer score: weighted average
// of catalog weights, a capped breadth bonus, and bounded random jitter.
// The weighted core is deterministic; only the jitter varies between calls.

use rand::Rng;

use crate::constants::{
    BONUS_CAP, BONUS_PER_TAG, JITTER_RANGE, SCORE_MAX, SCORE_MIN, WEIGHT_SCALE,
};
use crate::tags::tag_weight;

/// Source of per-call score jitter. Injected so tests can pin the noise.
pub trait JitterSource {
    /// One draw in [-JITTER_RANGE, +JITTER_RANGE). Re-drawn per score call.
    fn jitter(&mut self) -> f64;
}

/// Production jitter: uniform noise from the thread-local RNG.
pub struct RandomJitter;

impl JitterSource for RandomJitter {
    fn jitter(&mut self) -> f64 {
        rand::thread_rng().gen_range(-JITTER_RANGE..JITTER_RANGE)
    }
}

/// Constant jitter, for deterministic tests.
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn jitter(&mut self) -> f64 {
        self.0
    }
}

/// Score a tag list with the default random jitter.
pub fn virality_score<S: AsRef<str>>(tag_names: &[S]) -> i64 {
    virality_score_with(tag_names, &mut RandomJitter)
}

/// Score a tag list with an explicit jitter source.
///
/// Tag names that don't resolve in the catalog are skipped silently; an
/// empty or fully-unresolvable list scores exactly 0.
pub fn virality_score_with<S: AsRef<str>>(tag_names: &[S], jitter: &mut dyn JitterSource) -> i64 {
    let weights: Vec<f64> = tag_names
        .iter()
        .filter_map(|name| tag_weight(name.as_ref()))
        .map(f64::from)
        .collect();

    if weights.is_empty() {
        return 0;
    }

    let average = weights.iter().sum::<f64>() / weights.len() as f64;
    let base = average * WEIGHT_SCALE;
    let bonus = (weights.len() as f64 * BONUS_PER_TAG).min(BONUS_CAP);

    let raw = (base + bonus + jitter.jitter()).round() as i64;
    raw.clamp(SCORE_MIN, SCORE_MAX)
}

/// Deterministic part of the score (no jitter). Useful for ordering checks.
pub fn base_score<S: AsRef<str>>(tag_names: &[S]) -> f64 {
    let weights: Vec<f64> = tag_names
        .iter()
        .filter_map(|name| tag_weight(name.as_ref()))
        .map(f64::from)
        .collect();

    if weights.is_empty() {
        return 0.0;
    }

    weights.iter().sum::<f64>() / weights.len() as f64 * WEIGHT_SCALE
}

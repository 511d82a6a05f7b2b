// Clip enrichment pipeline
// Takes candidate clips from the LLM collaborator, assigns viral tags,
// scores them, and emits immutable enriched records ready for storage.

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{REASON_DELIMITER, REASON_TAG_COUNT};
use crate::scoring::{virality_score_with, JitterSource, RandomJitter};
use crate::tags::analyzer;

/// A proposed excerpt from the clip-proposal collaborator. Shapes coming off
/// the wire are messy: fields may be missing, empty, or carry numbers as
/// strings. Coercion happens here, once, at the boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateClip {
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "coerce_seconds")]
    pub start: f64,
    #[serde(default, deserialize_with = "coerce_seconds")]
    pub end: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hook: String,
}

/// Total string/number -> seconds coercion. Anything non-numeric becomes 0.
fn coerce_seconds<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let seconds = match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(seconds)
}

/// Candidate clip plus score, tags, and rationale. Created once per
/// candidate and never mutated; serializes straight to the wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedClip {
    pub title: String,
    pub start: f64,
    pub end: f64,
    pub description: String,
    pub hook: String,
    pub score: i64,
    pub viral_tags: Vec<String>,
    pub score_reasons: String,
}

/// Which analyzer the pipeline runs. Both satisfy the same output contract;
/// quick trades recall and weight ranking for latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerMode {
    Full,
    Quick,
}

impl AnalyzerMode {
    fn assign_tags(&self, clip: &CandidateClip) -> Vec<String> {
        match self {
            AnalyzerMode::Full => {
                analyzer::analyze(&clip.hook, &clip.title, &clip.description)
            }
            AnalyzerMode::Quick => {
                let text = format!("{} {} {}", clip.title, clip.description, clip.hook)
                    .to_lowercase();
                analyzer::quick_analyze(&text)
            }
        }
    }
}

/// Enrich a single candidate with an explicit jitter source.
pub fn enrich_clip_with(
    clip: &CandidateClip,
    mode: AnalyzerMode,
    jitter: &mut dyn JitterSource,
) -> EnrichedClip {
    let tags = mode.assign_tags(clip);
    let score = virality_score_with(&tags, jitter);
    let reasons = tags
        .iter()
        .take(REASON_TAG_COUNT)
        .cloned()
        .collect::<Vec<_>>()
        .join(REASON_DELIMITER);

    EnrichedClip {
        title: clip.title.clone(),
        start: clip.start,
        end: clip.end,
        description: clip.description.clone(),
        hook: clip.hook.clone(),
        score,
        viral_tags: tags,
        score_reasons: reasons,
    }
}

/// Enrich candidates one-to-one, preserving input order.
///
/// Each candidate is processed independently against the read-only catalog,
/// so there is no shared state between iterations.
pub fn enrich_clips(clips: &[CandidateClip], mode: AnalyzerMode) -> Vec<EnrichedClip> {
    let mut jitter = RandomJitter;
    let enriched: Vec<EnrichedClip> = clips
        .iter()
        .map(|clip| enrich_clip_with(clip, mode, &mut jitter))
        .collect();

    log::debug!(
        "Enriched {} candidate clip(s) via {:?} analyzer",
        enriched.len(),
        mode
    );
    enriched
}

// Tag analyzers
// Two strategies over the same matching primitive: a full catalog scan that
// weight-ranks its candidates, and a quick path over a reduced table for the
// latency-sensitive request path.

use crate::constants::{CANDIDATE_POOL_LIMIT, MAX_TAGS_PER_CLIP, QUICK_TAG_LIMIT};

use super::patterns::{any_match, matches, QUICK_TRIGGERS};
use super::VIRAL_TAGS;

/// Analyze clip text against the full catalog.
///
/// Returns at most 5 tag names, highest weight first, no duplicates. Empty
/// input simply yields an empty list; this never fails.
///
/// Known quirk: scanning stops once 8 candidates have matched, and only then
/// are candidates weight-sorted. When more than 8 tags would match, the ones
/// earlier in catalog order are preferentially retained -- "found first",
/// not "most relevant". Kept as-is because changing it would shift the
/// output distribution of every stored score.
pub fn analyze(content: &str, title: &str, description: &str) -> Vec<String> {
    let text = format!("{} {} {}", title, description, content).to_lowercase();

    let mut candidates: Vec<&'static super::ViralTag> = Vec::new();
    for tag in VIRAL_TAGS {
        if matches(tag.name, &text) {
            candidates.push(tag);
            if candidates.len() >= CANDIDATE_POOL_LIMIT {
                break;
            }
        }
    }

    // Stable sort: equal weights keep catalog order, so ties break the same
    // way on every call.
    candidates.sort_by(|a, b| b.weight.cmp(&a.weight));
    candidates.truncate(MAX_TAGS_PER_CLIP);
    candidates.iter().map(|t| t.name.to_string()).collect()
}

/// Quick analysis over the reduced high-signal table.
///
/// `text` must already be lowercased. Stops at the first 5 matches and
/// returns them in table-declaration order -- no weight sorting. Callers
/// choosing this path trade recall and ranking accuracy for latency.
pub fn quick_analyze(text: &str) -> Vec<String> {
    let mut tags = Vec::new();
    for (name, patterns) in QUICK_TRIGGERS {
        if any_match(patterns, text) {
            tags.push(name.to_string());
            if tags.len() >= QUICK_TAG_LIMIT {
                break;
            }
        }
    }
    tags
}

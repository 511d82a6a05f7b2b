// Proposal payload parsing
// The clip-proposal collaborator is an LLM; its responses are supposed to be
// a JSON object {"clips": [...]} but often arrive wrapped in prose or code
// fences. Parse leniently before giving up.

use serde::Deserialize;

use crate::enrich::CandidateClip;
use crate::error::{ClipboyError, Result};

#[derive(Debug, Deserialize)]
struct ProposalPayload {
    clips: Vec<CandidateClip>,
}

/// Extract candidate clips from a raw collaborator response.
///
/// Accepted shapes, in order:
/// 1. `{"clips": [...]}`
/// 2. a bare top-level array of clips
/// 3. the first-`{`-to-last-`}` substring of the text, parsed as shape 1
///
/// Anything else is an `InvalidProposals` error; this never panics on
/// malformed input.
pub fn parse_proposals(raw: &str) -> Result<Vec<CandidateClip>> {
    if let Ok(payload) = serde_json::from_str::<ProposalPayload>(raw) {
        return Ok(payload.clips);
    }

    if let Ok(clips) = serde_json::from_str::<Vec<CandidateClip>>(raw) {
        return Ok(clips);
    }

    if let Some(inner) = extract_json_object(raw) {
        if let Ok(payload) = serde_json::from_str::<ProposalPayload>(inner) {
            return Ok(payload.clips);
        }
    }

    Err(ClipboyError::InvalidProposals(
        "no clips array found in payload".to_string(),
    ))
}

/// Widest {...} span in the text, if any.
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(&raw[start..=end])
}

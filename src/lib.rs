// ClipBoy - Library Entry Point
//
// Transcript-to-clips engine: candidate clip proposals come from an external
// LLM collaborator; this crate tags them against a static viral-content
// catalog, scores them 0-100, and stores the enriched results.

pub mod constants;
pub mod error;
pub mod tags;
pub mod scoring;
pub mod enrich;
pub mod proposals;
pub mod db;

pub use enrich::{enrich_clips, AnalyzerMode, CandidateClip, EnrichedClip};
pub use error::{ClipboyError, Result};
pub use scoring::virality_score;

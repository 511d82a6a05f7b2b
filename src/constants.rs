// ClipBoy Constants
// These values define the tagging/scoring contract. Changing them changes
// the score distribution of everything already stored.

pub const SCORING_VERSION: u32 = 1;

// Tag analysis
pub const MAX_TAGS_PER_CLIP: usize = 5;
// The full analyzer stops collecting once this many tags have matched;
// weight sorting happens afterward among the collected pool only.
pub const CANDIDATE_POOL_LIMIT: usize = 8;
pub const QUICK_TAG_LIMIT: usize = 5;

// Scoring
pub const WEIGHT_SCALE: f64 = 10.0;
pub const BONUS_PER_TAG: f64 = 2.0;
pub const BONUS_CAP: f64 = 20.0;
pub const JITTER_RANGE: f64 = 5.0; // symmetric, +/- this many points
pub const SCORE_MIN: i64 = 0;
pub const SCORE_MAX: i64 = 100;

// Enrichment
pub const REASON_TAG_COUNT: usize = 3;
pub const REASON_DELIMITER: &str = ", ";

// Paths
pub const CLIPBOY_FOLDER: &str = ".clipboy";
pub const DB_FILENAME: &str = "clipboy.db";

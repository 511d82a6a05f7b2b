// Viral tag catalog
// Static registry of recognizable short-form content patterns. Weights are
// 1-10 and feed directly into the virality score; category is informational.

pub mod analyzer;
pub mod patterns;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagCategory {
    Hook,
    Emotion,
    Trend,
    Format,
    Content,
    Technical,
}

impl TagCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagCategory::Hook => "hook",
            TagCategory::Emotion => "emotion",
            TagCategory::Trend => "trend",
            TagCategory::Format => "format",
            TagCategory::Content => "content",
            TagCategory::Technical => "technical",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "hook" => Some(TagCategory::Hook),
            "emotion" => Some(TagCategory::Emotion),
            "trend" => Some(TagCategory::Trend),
            "format" => Some(TagCategory::Format),
            "content" => Some(TagCategory::Content),
            "technical" => Some(TagCategory::Technical),
            _ => None,
        }
    }
}

/// One catalog entry. The catalog is process-wide static data, never mutated.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ViralTag {
    pub name: &'static str,
    pub description: &'static str,
    pub weight: u8,
    pub category: TagCategory,
}

const fn tag(
    name: &'static str,
    description: &'static str,
    weight: u8,
    category: TagCategory,
) -> ViralTag {
    ViralTag {
        name,
        description,
        weight,
        category,
    }
}

use TagCategory::{Content, Emotion, Format, Hook, Technical, Trend};

/// The full tag catalog, in scan order. The full analyzer iterates this
/// top-to-bottom, so earlier entries win when the candidate pool fills up.
pub const VIRAL_TAGS: &[ViralTag] = &[
    // Hooks (strong opening moments)
    tag("Shocking Reveal", "Unexpected information that surprises viewers", 9, Hook),
    tag("Controversial Take", "Bold opinion that sparks debate", 8, Hook),
    tag("Mystery Setup", "Creates curiosity gap that needs resolution", 8, Hook),
    tag("Before/After", "Dramatic transformation or comparison", 7, Hook),
    tag("Secret Exposed", "Hidden information being revealed", 8, Hook),
    tag("Mistake Caught", "Someone making an error or being wrong", 6, Hook),
    tag("Plot Twist", "Unexpected turn of events", 9, Hook),
    tag("Expert Breakdown", "Professional analysis of something", 7, Hook),
    // Emotions (high emotional impact)
    tag("Hilarious", "Makes people laugh out loud", 8, Emotion),
    tag("Heartwarming", "Touching, emotional, feel-good content", 7, Emotion),
    tag("Shocking", "Surprising or unbelievable content", 8, Emotion),
    tag("Angry", "Content that makes people mad or frustrated", 6, Emotion),
    tag("Inspiring", "Motivational or uplifting content", 7, Emotion),
    tag("Relatable", "Content people can relate to personally", 6, Emotion),
    tag("Nostalgic", "Reminds people of the past", 5, Emotion),
    tag("Awe-Inspiring", "Amazing, impressive, or mind-blowing", 8, Emotion),
    // Trends (current viral formats)
    tag("POV", "Point of view content", 6, Trend),
    tag("Day in My Life", "Daily routine content", 5, Trend),
    tag("Tutorial", "How-to or educational content", 6, Trend),
    tag("Reaction", "Reacting to something", 5, Trend),
    tag("Challenge", "Participating in a trend or challenge", 6, Trend),
    tag("Storytime", "Personal story being told", 5, Trend),
    tag("Transformation", "Makeover or change content", 7, Trend),
    tag("Behind the Scenes", "Exclusive or insider content", 6, Trend),
    // Formats (video structure)
    tag("Quick Tips", "Fast, actionable advice", 6, Format),
    tag("List Format", "Numbered or bulleted content", 5, Format),
    tag("Q&A", "Question and answer format", 5, Format),
    tag("Comparison", "Comparing two or more things", 6, Format),
    tag("Timeline", "Chronological progression", 5, Format),
    tag("Step-by-Step", "Process broken down into steps", 6, Format),
    tag("Myth Busting", "Debunking common beliefs", 7, Format),
    tag("Ranking", "Ordering items by preference/quality", 6, Format),
    // Content (subject matter)
    tag("Life Hack", "Practical life improvement tip", 7, Content),
    tag("Money Tips", "Financial advice or insights", 8, Content),
    tag("Health & Fitness", "Wellness, exercise, or health content", 6, Content),
    tag("Tech Review", "Technology product or service review", 6, Content),
    tag("Food Content", "Cooking, eating, or food-related", 5, Content),
    tag("Travel", "Travel experiences or tips", 5, Content),
    tag("Career Advice", "Professional development content", 7, Content),
    tag("Relationship Tips", "Dating, friendship, or family advice", 6, Content),
    tag("Productivity", "Getting things done efficiently", 6, Content),
    tag("Creativity", "Art, design, or creative process", 5, Content),
    // Technical (production quality)
    tag("High Energy", "Fast-paced, energetic delivery", 6, Technical),
    tag("Visual Appeal", "Strong visual elements or graphics", 5, Technical),
    tag("Clear Audio", "Good sound quality and clarity", 4, Technical),
    tag("Smooth Editing", "Well-edited, polished content", 4, Technical),
    tag("Good Lighting", "Well-lit, professional appearance", 3, Technical),
    tag("Captions", "Text overlays or subtitles", 4, Technical),
    tag("Music/SFX", "Background music or sound effects", 3, Technical),
    tag("Multiple Angles", "Different camera angles or shots", 4, Technical),
];

/// Look up a catalog entry by exact name.
pub fn find_tag(name: &str) -> Option<&'static ViralTag> {
    VIRAL_TAGS.iter().find(|t| t.name == name)
}

/// Weight for a tag name, if the name resolves in the catalog.
pub fn tag_weight(name: &str) -> Option<u8> {
    find_tag(name).map(|t| t.weight)
}

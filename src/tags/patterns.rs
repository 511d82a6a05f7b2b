// Trigger patterns
// Maps each tag name to the lexical cues that assign it. Matching is crude
// on purpose: cheap, explainable lowercase containment (with regex support),
// which is acceptable for an engagement heuristic. Triggers fire inside
// larger words and phrases too; that bluntness is part of the contract.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::VIRAL_TAGS;

#[derive(Debug, Clone, Copy)]
pub enum TriggerPattern {
    /// Plain lowercase substring, checked via containment.
    Substring(&'static str),
    /// Regular expression source, compiled once on first use.
    Regex(&'static str),
}

use TriggerPattern::Regex as Re;
use TriggerPattern::Substring as Sub;

/// Trigger patterns for a tag name. Tags without an entry never match.
pub fn trigger_patterns(tag_name: &str) -> &'static [TriggerPattern] {
    match tag_name {
        "Shocking Reveal" => &[
            Sub("shocking"),
            Sub("unexpected"),
            Sub("surprising"),
            Sub("reveal"),
            Sub("exposed"),
            Sub("secret"),
        ],
        "Controversial Take" => &[
            Sub("controversial"),
            Sub("unpopular opinion"),
            Sub("hot take"),
            Sub("debate"),
            Sub("argue"),
        ],
        "Mystery Setup" => &[
            Sub("mystery"),
            Sub("secret"),
            Sub("hidden"),
            Sub("unknown"),
            Sub("reveal"),
            Sub("discover"),
        ],
        "Before/After" => &[
            Sub("before"),
            Sub("after"),
            Sub("transformation"),
            Sub("change"),
            Sub("difference"),
        ],
        "Secret Exposed" => &[
            Sub("secret"),
            Sub("exposed"),
            Sub("revealed"),
            Sub("hidden"),
            Sub("confidential"),
        ],
        "Mistake Caught" => &[
            Sub("mistake"),
            Sub("error"),
            Sub("wrong"),
            Sub("caught"),
            Sub("fail"),
        ],
        "Plot Twist" => &[
            Sub("twist"),
            Sub("unexpected"),
            Sub("surprise"),
            Sub("plot"),
            Sub("turn"),
        ],
        "Expert Breakdown" => &[
            Sub("expert"),
            Sub("analysis"),
            Sub("breakdown"),
            Sub("explain"),
            Sub("professional"),
        ],
        "Hilarious" => &[
            Sub("funny"),
            Sub("hilarious"),
            Sub("laugh"),
            Sub("comedy"),
            Sub("joke"),
            Sub("humor"),
        ],
        "Heartwarming" => &[
            Sub("heartwarming"),
            Sub("touching"),
            Sub("emotional"),
            Sub("sweet"),
            Sub("cute"),
        ],
        "Shocking" => &[
            Sub("shocking"),
            Sub("unbelievable"),
            Sub("amazing"),
            Sub("incredible"),
            Sub("wow"),
        ],
        "Angry" => &[
            Sub("angry"),
            Sub("mad"),
            Sub("frustrated"),
            Sub("annoyed"),
            Sub("upset"),
        ],
        "Inspiring" => &[
            Sub("inspiring"),
            Sub("motivational"),
            Sub("uplifting"),
            Sub("encouraging"),
            Sub("empowering"),
        ],
        "Relatable" => &[
            Sub("relatable"),
            Sub("relate"),
            Sub("same"),
            Sub("me too"),
            Sub("exactly"),
        ],
        "Nostalgic" => &[
            Sub("nostalgic"),
            Sub("remember"),
            Sub("throwback"),
            Sub("old"),
            Sub("childhood"),
        ],
        "Awe-Inspiring" => &[
            Sub("amazing"),
            Sub("incredible"),
            Sub("mind-blowing"),
            Sub("awe"),
            Sub("impressive"),
        ],
        "POV" => &[Sub("pov"), Sub("point of view"), Sub("from my perspective")],
        "Day in My Life" => &[
            Sub("day in my life"),
            Sub("daily routine"),
            Sub("my day"),
            Sub("routine"),
        ],
        "Tutorial" => &[
            Sub("tutorial"),
            Sub("how to"),
            Sub("guide"),
            Sub("step by step"),
            Sub("learn"),
        ],
        "Reaction" => &[
            Sub("reaction"),
            Sub("reacting"),
            Sub("my reaction"),
            Sub("first time"),
        ],
        "Challenge" => &[Sub("challenge"), Sub("trying"), Sub("attempt"), Sub("dare")],
        "Storytime" => &[
            Sub("storytime"),
            Sub("story"),
            Sub("happened to me"),
            Sub("experience"),
        ],
        "Transformation" => &[
            Sub("transformation"),
            Sub("makeover"),
            Sub("change"),
            Sub("glow up"),
        ],
        "Behind the Scenes" => &[
            Sub("behind the scenes"),
            Sub("bts"),
            Sub("making of"),
            Sub("process"),
        ],
        "Quick Tips" => &[
            Sub("tips"),
            Sub("tricks"),
            Sub("hacks"),
            Sub("quick"),
            Sub("fast"),
        ],
        "List Format" => &[
            Sub("list"),
            Sub("top"),
            Sub("best"),
            Sub("worst"),
            Sub("ranking"),
        ],
        "Q&A" => &[
            Sub("q&a"),
            Sub("question"),
            Sub("answer"),
            Sub("ask me"),
            Sub("faq"),
        ],
        "Comparison" => &[
            // Literal regex; behaves exactly like substring containment.
            Re("vs"),
            Sub("versus"),
            Sub("compare"),
            Sub("comparison"),
            Sub("difference"),
        ],
        "Timeline" => &[
            Sub("timeline"),
            Sub("chronological"),
            Sub("sequence"),
            Sub("order"),
        ],
        "Step-by-Step" => &[
            Sub("step"),
            Sub("steps"),
            Sub("process"),
            Sub("procedure"),
            Sub("method"),
        ],
        "Myth Busting" => &[
            Sub("myth"),
            Sub("busting"),
            Sub("debunk"),
            Sub("false"),
            Sub("wrong"),
        ],
        "Ranking" => &[
            Sub("ranking"),
            Sub("rank"),
            Sub("best"),
            Sub("worst"),
            Sub("top"),
            Sub("bottom"),
        ],
        "Life Hack" => &[
            Sub("life hack"),
            Sub("hack"),
            Sub("trick"),
            Sub("tip"),
            Sub("shortcut"),
        ],
        "Money Tips" => &[
            Sub("money"),
            Sub("finance"),
            Sub("budget"),
            Sub("saving"),
            Sub("investing"),
            Sub("rich"),
        ],
        "Health & Fitness" => &[
            Sub("health"),
            Sub("fitness"),
            Sub("exercise"),
            Sub("workout"),
            Sub("diet"),
            Sub("nutrition"),
        ],
        "Tech Review" => &[
            Sub("tech"),
            Sub("review"),
            Sub("product"),
            Sub("gadget"),
            Sub("technology"),
        ],
        "Food Content" => &[
            Sub("food"),
            Sub("cooking"),
            Sub("recipe"),
            Sub("eating"),
            Sub("meal"),
            Sub("taste"),
        ],
        "Travel" => &[
            Sub("travel"),
            Sub("trip"),
            Sub("vacation"),
            Sub("destination"),
            Sub("explore"),
        ],
        "Career Advice" => &[
            Sub("career"),
            Sub("job"),
            Sub("work"),
            Sub("professional"),
            Sub("business"),
        ],
        "Relationship Tips" => &[
            Sub("relationship"),
            Sub("dating"),
            Sub("love"),
            Sub("partner"),
            Sub("marriage"),
        ],
        "Productivity" => &[
            Sub("productivity"),
            Sub("productive"),
            Sub("efficient"),
            Sub("organize"),
            Sub("focus"),
        ],
        "Creativity" => &[
            Sub("creative"),
            Sub("art"),
            Sub("design"),
            Sub("craft"),
            Sub("artistic"),
            Sub("imagination"),
        ],
        "High Energy" => &[
            Sub("energy"),
            Sub("excited"),
            Sub("pumped"),
            Sub("hyped"),
            Sub("enthusiastic"),
        ],
        "Visual Appeal" => &[
            Sub("visual"),
            Sub("graphics"),
            Sub("design"),
            Sub("aesthetic"),
            Sub("beautiful"),
        ],
        "Clear Audio" => &[
            Sub("audio"),
            Sub("sound"),
            Sub("voice"),
            Sub("clear"),
            Sub("crisp"),
        ],
        "Smooth Editing" => &[
            Sub("editing"),
            Sub("edited"),
            Sub("smooth"),
            Sub("polished"),
            Sub("professional"),
        ],
        "Good Lighting" => &[
            Sub("lighting"),
            Sub("bright"),
            Sub("well-lit"),
            Sub("illuminated"),
        ],
        "Captions" => &[
            Sub("captions"),
            Sub("subtitles"),
            Sub("text"),
            Sub("words"),
            Sub("overlay"),
        ],
        "Music/SFX" => &[
            Sub("music"),
            Sub("sound"),
            Sub("audio"),
            Sub("background"),
            Sub("effects"),
        ],
        "Multiple Angles" => &[
            Sub("angles"),
            Sub("shots"),
            Sub("camera"),
            Sub("perspective"),
            Sub("view"),
        ],
        _ => &[],
    }
}

/// Reduced high-signal table for the quick analyzer. A strict subset of the
/// full catalog's names; entries are checked in declaration order.
pub const QUICK_TRIGGERS: &[(&str, &[TriggerPattern])] = &[
    ("Shocking Reveal", &[Sub("shocking"), Sub("unexpected"), Sub("reveal"), Sub("exposed")]),
    ("Hilarious", &[Sub("funny"), Sub("hilarious"), Sub("laugh"), Sub("comedy")]),
    ("Tutorial", &[Sub("how to"), Sub("tutorial"), Sub("guide"), Sub("step by step")]),
    ("POV", &[Sub("pov"), Sub("point of view"), Sub("from my perspective")]),
    ("Life Hack", &[Sub("life hack"), Sub("hack"), Sub("trick"), Sub("tip")]),
    ("Money Tips", &[Sub("money"), Sub("finance"), Sub("budget"), Sub("saving")]),
    ("Reaction", &[Sub("reaction"), Sub("reacting"), Sub("first time")]),
    ("Storytime", &[Sub("storytime"), Sub("story"), Sub("happened to me")]),
    ("Transformation", &[Sub("transformation"), Sub("makeover"), Sub("change")]),
    ("Quick Tips", &[Sub("tips"), Sub("tricks"), Sub("hacks"), Sub("quick")]),
    ("High Energy", &[Sub("energy"), Sub("excited"), Sub("pumped"), Sub("hyped")]),
    ("Inspiring", &[Sub("inspiring"), Sub("motivational"), Sub("uplifting")]),
    ("Relatable", &[Sub("relatable"), Sub("relate"), Sub("same"), Sub("me too")]),
    ("Controversial Take", &[Sub("controversial"), Sub("unpopular opinion"), Sub("hot take")]),
    ("Before/After", &[Sub("before"), Sub("after"), Sub("transformation"), Sub("change")]),
];

// Regexes compile once, on first match attempt. A pattern that fails to
// compile is logged and simply never matches.
static REGEX_CACHE: Lazy<HashMap<&'static str, Regex>> = Lazy::new(|| {
    let mut cache = HashMap::new();
    let quick = QUICK_TRIGGERS.iter().flat_map(|(_, pats)| pats.iter());
    let full = VIRAL_TAGS
        .iter()
        .flat_map(|t| trigger_patterns(t.name).iter());

    for pattern in full.chain(quick) {
        if let TriggerPattern::Regex(source) = pattern {
            if cache.contains_key(source) {
                continue;
            }
            match Regex::new(source) {
                Ok(re) => {
                    cache.insert(*source, re);
                }
                Err(e) => {
                    log::warn!("Skipping unparsable trigger pattern {:?}: {}", source, e);
                }
            }
        }
    }
    cache
});

/// True if any of `patterns` occurs in `text`. `text` must be lowercased.
pub fn any_match(patterns: &[TriggerPattern], text: &str) -> bool {
    patterns.iter().any(|pattern| match pattern {
        TriggerPattern::Substring(needle) => text.contains(needle),
        TriggerPattern::Regex(source) => REGEX_CACHE
            .get(source)
            .is_some_and(|re| re.is_match(text)),
    })
}

/// True if any trigger pattern for `tag_name` occurs in `text`.
/// Pure: same arguments always give the same answer.
pub fn matches(tag_name: &str, text: &str) -> bool {
    any_match(trigger_patterns(tag_name), text)
}

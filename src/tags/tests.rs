// Tag catalog, matcher, and analyzer tests

use super::analyzer::{analyze, quick_analyze};
use super::patterns::{matches, trigger_patterns, QUICK_TRIGGERS};
use super::{find_tag, tag_weight, TagCategory, VIRAL_TAGS};
use crate::constants::{MAX_TAGS_PER_CLIP, QUICK_TAG_LIMIT};

// ----- Catalog -----

#[test]
fn catalog_names_are_unique() {
    let mut names: Vec<&str> = VIRAL_TAGS.iter().map(|t| t.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), VIRAL_TAGS.len());
}

#[test]
fn catalog_weights_are_in_range() {
    for tag in VIRAL_TAGS {
        assert!(
            (1..=10).contains(&tag.weight),
            "tag {:?} has weight {}",
            tag.name,
            tag.weight
        );
    }
}

#[test]
fn catalog_covers_all_six_categories() {
    for category in [
        TagCategory::Hook,
        TagCategory::Emotion,
        TagCategory::Trend,
        TagCategory::Format,
        TagCategory::Content,
        TagCategory::Technical,
    ] {
        assert!(
            VIRAL_TAGS.iter().any(|t| t.category == category),
            "no tags in category {:?}",
            category
        );
    }
}

#[test]
fn every_catalog_tag_has_trigger_patterns() {
    for tag in VIRAL_TAGS {
        assert!(
            !trigger_patterns(tag.name).is_empty(),
            "tag {:?} has no trigger patterns",
            tag.name
        );
    }
}

#[test]
fn lookup_by_name() {
    assert_eq!(tag_weight("Shocking Reveal"), Some(9));
    assert_eq!(tag_weight("Good Lighting"), Some(3));
    assert_eq!(tag_weight("No Such Tag"), None);
    assert!(find_tag("Hilarious").is_some());
}

#[test]
fn category_round_trips_through_strings() {
    for category in [
        TagCategory::Hook,
        TagCategory::Emotion,
        TagCategory::Trend,
        TagCategory::Format,
        TagCategory::Content,
        TagCategory::Technical,
    ] {
        assert_eq!(TagCategory::parse(category.as_str()), Some(category));
    }
    assert_eq!(TagCategory::parse("viral"), None);
}

// ----- Matcher -----

#[test]
fn matcher_is_any_of_semantics() {
    assert!(matches("Hilarious", "that was so funny"));
    assert!(matches("Hilarious", "pure comedy gold"));
    assert!(!matches("Hilarious", "a serious lecture"));
}

#[test]
fn matcher_unknown_tag_never_matches() {
    assert!(!matches("No Such Tag", "funny money tutorial"));
}

#[test]
fn matcher_is_pure() {
    let text = "an unexpected reveal";
    let first = matches("Shocking Reveal", text);
    let second = matches("Shocking Reveal", text);
    assert_eq!(first, second);
    assert!(first);
}

#[test]
fn matcher_keeps_crude_substring_semantics() {
    // Containment is deliberately blunt; these all fire.
    assert!(matches("Step-by-Step", "step by step"));
    assert!(matches("Step-by-Step", "step 1: open the app"));
    assert!(matches("List Format", "my top tips"));
    assert!(matches("List Format", "my top 10 favorites"));
    assert!(matches("Comparison", "iphone vs android"));
    // Even inside larger words.
    assert!(matches("Comparison", "nested divs everywhere"));
    // Only the declared trigger words count; a dollar amount alone is not
    // a money cue.
    assert!(!matches("Money Tips", "a $50 deal"));
}

#[test]
fn matcher_regex_patterns_share_containment_semantics() {
    // "vs" is declared as a regex; as a literal it matches anywhere in the
    // text, exactly like the substring triggers around it.
    assert!(matches("Comparison", "this vs that"));
    assert!(!matches("Comparison", "two phones side by side"));
}

#[test]
fn matcher_expects_lowercased_text() {
    // Contract: callers lowercase before matching.
    assert!(matches("Hilarious", "funny"));
    assert!(!matches("Hilarious", "FUNNY"));
}

// ----- Full analyzer -----

#[test]
fn analyze_empty_input_yields_empty_tags() {
    assert!(analyze("", "", "").is_empty());
}

#[test]
fn analyze_handles_arbitrary_text_without_panicking() {
    for t in ["", " ", "\n\t", "ünïcödé 💥", "{\"json\": true}", "a"] {
        let tags = analyze(t, t, t);
        assert!(tags.len() <= MAX_TAGS_PER_CLIP);
        let mut deduped = tags.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), tags.len(), "duplicates for input {:?}", t);
    }
}

#[test]
fn analyze_is_case_insensitive() {
    let tags = analyze("", "FUNNY TUTORIAL", "");
    assert!(tags.contains(&"Hilarious".to_string()));
    assert!(tags.contains(&"Tutorial".to_string()));
}

#[test]
fn analyze_orders_by_descending_weight() {
    let tags = analyze("funny tutorial money", "", "");
    assert!(tags.contains(&"Hilarious".to_string()));
    assert!(tags.contains(&"Tutorial".to_string()));
    assert!(tags.contains(&"Money Tips".to_string()));

    let pos = |name: &str| tags.iter().position(|t| t == name).unwrap();
    // Hilarious and Money Tips are weight 8, Tutorial is 6.
    assert!(pos("Hilarious") < pos("Tutorial"));
    assert!(pos("Money Tips") < pos("Tutorial"));
}

#[test]
fn analyze_tie_break_is_stable_across_calls() {
    let first = analyze("funny tutorial money", "", "");
    for _ in 0..10 {
        assert_eq!(analyze("funny tutorial money", "", ""), first);
    }
}

#[test]
fn analyze_finds_expected_tags_for_hook_heavy_title() {
    let tags = analyze("", "Shocking secret exposed about money", "");
    for expected in ["Shocking Reveal", "Secret Exposed", "Money Tips"] {
        let count = tags.iter().filter(|t| t.as_str() == expected).count();
        assert_eq!(count, 1, "expected exactly one {:?} in {:?}", expected, tags);
    }
}

#[test]
fn analyze_returns_at_most_five_tags() {
    // Dense text that trips many triggers.
    let text = "shocking secret exposed funny money tutorial challenge story \
                transformation tips best review travel workout";
    let tags = analyze(text, text, text);
    assert!(tags.len() <= MAX_TAGS_PER_CLIP);
}

#[test]
fn analyze_pool_cap_prefers_catalog_order() {
    // Trips far more than 8 tags; only the first 8 in catalog order form the
    // pool, so hooks (scanned first) crowd out later matches even when those
    // later matches would win on weight.
    let text = "shocking secret exposed unexpected twist funny amazing money \
                tips best tutorial workout travel recipe career relationship";
    let tags = analyze(text, "", "");
    assert_eq!(
        tags,
        vec![
            "Shocking Reveal",
            "Plot Twist",
            "Mystery Setup",
            "Secret Exposed",
            "Hilarious"
        ]
    );
    // Money Tips (weight 8) matches the text but sits past the pool cutoff,
    // so it never gets scanned -- "found first", not "most relevant".
    assert!(!tags.contains(&"Money Tips".to_string()));
}

// ----- Quick analyzer -----

#[test]
fn quick_table_is_strict_subset_of_catalog() {
    for (name, _) in QUICK_TRIGGERS {
        assert!(find_tag(name).is_some(), "quick tag {:?} not in catalog", name);
    }
    assert!(QUICK_TRIGGERS.len() < VIRAL_TAGS.len());
}

#[test]
fn quick_analyze_empty_text_yields_empty_tags() {
    assert!(quick_analyze("").is_empty());
}

#[test]
fn quick_analyze_returns_declaration_order_not_weight_order() {
    // Tutorial (weight 6) is declared before Money Tips (weight 8).
    let tags = quick_analyze("how to save money");
    let pos = |name: &str| tags.iter().position(|t| t == name).unwrap();
    assert!(pos("Tutorial") < pos("Money Tips"));
}

#[test]
fn quick_analyze_stops_after_five_matches() {
    let text = "shocking reveal funny how to pov hack money reaction story \
                transformation tips energy";
    let tags = quick_analyze(text);
    assert_eq!(tags.len(), QUICK_TAG_LIMIT);
    // First five in table order.
    assert_eq!(
        tags,
        vec!["Shocking Reveal", "Hilarious", "Tutorial", "POV", "Life Hack"]
    );
}

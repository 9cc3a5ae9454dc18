//! Normalizer properties: stable on its own output, well-formed, case-blind.

use pagewise::text::{normalize, stem};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Inflected words of the kind manuals are made of.
const MANUAL_WORDS: &[&str] = &[
    "agreed", "agreement", "agrees", "battery", "batteries", "charging", "charger", "charged",
    "connected", "connection", "connections", "display", "displayed", "displaying", "operating",
    "operation", "operational", "relational", "related", "relating", "conditional",
    "conditioning", "installed", "installation", "adjusting", "adjustment", "adjustable",
    "replaced", "replacement", "replacing", "cleaning", "cleaned", "cleanliness", "powered",
    "powerful", "powering", "heating", "heated", "heater", "pressed", "pressing", "pressure",
    "filling", "filled", "removing", "removal", "removable", "sensor", "sensors", "sensing",
    "sensitive", "sensitivity", "calibrated", "calibration", "generated", "generator",
    "generalization", "hopeful", "hopefulness", "happiness", "happily", "caresses", "ponies",
    "motoring", "conflated", "troubled", "sizing", "hopping", "filing", "controlled",
    "controller", "controlling", "measured", "measurement", "measuring", "formality",
    "formalize", "rationalization", "differently", "difference", "different", "electrical",
    "electricity", "generally", "activated", "activation", "actively", "effective",
    "effectively", "effectiveness", "digitally", "warranty", "warranties", "updated",
    "updating", "resetting", "wireless", "wiring", "signaling", "signals", "filtered",
    "filtering", "seasonal", "lighting", "lightly", "waterproof", "boiling", "boiled", "safety",
    "safely", "protected", "protection", "protective", "indicated", "indicator", "indicating",
    "required", "requirement", "allowed", "allowance", "usefulness", "useful", "using", "users",
    "firmware", "bluetooth", "speakers", "speaker", "volume", "adapters", "adapter", "screens",
    "network", "networking", "settings", "setting", "cables", "cable", "buttons", "button",
    "instructions", "instruction", "cooling", "overheating", "unplug", "unplugged", "plugged",
    "replaceable", "descaling", "descaled", "vinegar", "kettle", "kettles", "children",
    "immerse", "immersed", "base", "maximum", "minimum", "capacity", "automatically",
    "automatic", "shutoff", "manually", "manual", "guide", "guidance", "documented",
    "documentation", "troubleshooting", "troubleshoot", "errors", "error",
];

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,12}").unwrap()
}

/// ASCII prose with punctuation, digits and line breaks.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9 ,.!?'\n-]{0,120}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: normalizing already-stemmed text a second time changes
    /// nothing, including for stems that stem again ("agreed" → "agre" → "agr").
    #[test]
    fn prop_normalize_idempotent_on_stemmed_text(
        words in prop::collection::vec(prop::sample::select(MANUAL_WORDS.to_vec()), 0..12),
    ) {
        let text = words.iter().map(|w| stem(w).into_owned()).collect::<Vec<_>>().join(" ");

        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Property: output is lowercase alphanumeric tokens joined by single spaces.
    #[test]
    fn prop_normalize_output_well_formed(text in text_strategy()) {
        let normalized = normalize(&text);
        prop_assert!(!normalized.starts_with(' '));
        prop_assert!(!normalized.ends_with(' '));
        prop_assert!(!normalized.contains("  "));
        prop_assert!(normalized
            .chars()
            .all(|c| c == ' ' || c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    /// Property: case never changes the normalized form.
    #[test]
    fn prop_normalize_ignores_case(text in text_strategy()) {
        prop_assert_eq!(normalize(&text.to_uppercase()), normalize(&text));
    }

    /// Property: stemming never lengthens a word and never erases one.
    #[test]
    fn prop_stem_shrinks_but_never_empties(word in word_strategy()) {
        let stemmed = stem(&word);
        prop_assert!(stemmed.len() <= word.len());
        prop_assert!(!stemmed.is_empty());
    }
}

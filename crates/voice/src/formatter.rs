//! Reply formatting for speech synthesis.
//!
//! Strips emphasis markup, expands abbreviations a synthesizer would spell
//! out or mispronounce, and gives "Here ..." replies a spoken introduction.

use once_cell::sync::Lazy;

use crate::text::{normalize_whitespace, Substitution, SubstitutionTable};

/// Introduction spoken before replies that open with "Here".
pub const HERE_INTRO: &str = "Here's what I found.";

/// Characters used for emphasis in chat replies.
const MARKUP_CHARS: &[char] = &['*', '_', '`', '#'];

/// Case-sensitive, applied top to bottom.
const ABBREVIATIONS: &[Substitution] = &[
    Substitution::literal("e.g.", "for example"),
    Substitution::literal("i.e.", "that is"),
    Substitution::literal("etc.", "et cetera"),
    Substitution::literal("approx.", "approximately"),
    Substitution::literal(" & ", " and "),
    Substitution::literal("24/7", "twenty four seven"),
    Substitution::word("BA", "British Airways"),
    Substitution::word("LHR", "London Heathrow"),
    Substitution::word("LGW", "London Gatwick"),
    Substitution::word("LCY", "London City"),
    Substitution::word("T3", "Terminal 3"),
    Substitution::word("T5", "Terminal 5"),
    Substitution::word("ETA", "estimated time of arrival"),
    Substitution::word("ETD", "estimated time of departure"),
    Substitution::word("FAQ", "frequently asked questions"),
    Substitution::word("ID", "identification"),
    Substitution::word("hrs", "hours"),
    Substitution::word("hr", "hour"),
    Substitution::word("mins", "minutes"),
    Substitution::word("kg", "kilograms"),
    Substitution::word("approx", "approximately"),
];

static ABBREVIATION_TABLE: Lazy<SubstitutionTable> =
    Lazy::new(|| SubstitutionTable::compile(ABBREVIATIONS));

/// Turn a chat reply into text suited for speech synthesis.
///
/// Deterministic and side-effect free. Text with no markup characters, no
/// abbreviation from the table, no leading "Here" and already-normalized
/// whitespace is returned unchanged.
pub fn format_for_voice(text: &str) -> String {
    if !has_voice_triggers(text) {
        return text.to_string();
    }

    let stripped: String = text.chars().filter(|c| !MARKUP_CHARS.contains(c)).collect();
    let expanded = ABBREVIATION_TABLE.apply(&stripped);
    let normalized = normalize_whitespace(&expanded);

    if normalized.starts_with("Here") && !normalized.starts_with(HERE_INTRO) {
        format!("{} {}", HERE_INTRO, normalized)
    } else {
        normalized
    }
}

/// Whether `text` contains anything [`format_for_voice`] rewrites.
pub fn has_voice_triggers(text: &str) -> bool {
    text.contains(MARKUP_CHARS)
        || ABBREVIATION_TABLE.matches(text)
        || (text.starts_with("Here") && !text.starts_with(HERE_INTRO))
        || normalize_whitespace(text) != text
}

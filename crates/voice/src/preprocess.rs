//! Cleanup for dictated user input.
//!
//! Speech recognizers split or mishear travel vocabulary; the table below
//! repairs the frequent cases before the text reaches the dialogue agent.

use once_cell::sync::Lazy;

use crate::text::{normalize_whitespace, Substitution, SubstitutionTable};

/// Applied top to bottom to lower-cased input.
const SPEECH_CORRECTIONS: &[Substitution] = &[
    Substitution::literal("british always", "british airways"),
    Substitution::literal("british air ways", "british airways"),
    Substitution::literal("heath row", "heathrow"),
    Substitution::literal("heath roe", "heathrow"),
    Substitution::literal("gat wick", "gatwick"),
    Substitution::literal("a vios", "avios"),
    Substitution::literal("avio's", "avios"),
    Substitution::literal("executive clubs", "executive club"),
    Substitution::literal("check in", "check-in"),
    Substitution::literal("bag age", "baggage"),
    Substitution::literal("lug age", "luggage"),
    Substitution::literal("board in pass", "boarding pass"),
    Substitution::literal("cancel ation", "cancellation"),
    Substitution::literal("re fund", "refund"),
    Substitution::word("terminal five", "terminal 5"),
    Substitution::word("terminal three", "terminal 3"),
    Substitution::word("to morrow", "tomorrow"),
    Substitution::word("to day", "today"),
];

static CORRECTION_TABLE: Lazy<SubstitutionTable> =
    Lazy::new(|| SubstitutionTable::compile(SPEECH_CORRECTIONS));

/// Normalize a speech-to-text transcript before it is sent to the agent.
pub fn preprocess_voice_input(text: &str) -> String {
    let lowered = normalize_whitespace(&text.to_lowercase());
    let corrected = normalize_whitespace(&CORRECTION_TABLE.apply(&lowered));

    if corrected != lowered {
        tracing::debug!(original = %text, corrected = %corrected, "Corrected voice input");
    }
    corrected
}

//! Conversational touches for voice replies.

/// Lead-in added to voice replies that do not already open conversationally.
pub const LEAD_IN: &str = "Sure!";

/// Openers that count as already conversational. Compared case-insensitively.
const RECOGNIZED_OPENERS: &[&str] = &[
    "sure",
    "certainly",
    "of course",
    "absolutely",
    "here's",
    "great",
    "i'm sorry",
    "sorry",
    "hello",
    "hi",
];

/// Topic follow-up appended to a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    Flight,
    Baggage,
    CheckIn,
}

/// Evaluated in order; only the first category whose keyword appears in the
/// user's message applies.
const FOLLOW_UPS: &[(FollowUp, &[&str])] = &[
    (FollowUp::Flight, &["flight", "book"]),
    (FollowUp::Baggage, &["baggage", "luggage", "bag"]),
    (FollowUp::CheckIn, &["check-in", "check in", "checkin"]),
];

impl FollowUp {
    /// First category matching `message`, if any.
    pub fn for_message(message: &str) -> Option<Self> {
        let lowered = message.to_lowercase();
        FOLLOW_UPS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
            .map(|(category, _)| *category)
    }

    pub fn sentence(&self) -> &'static str {
        match self {
            FollowUp::Flight => "Is there anything else you'd like to know about your flight?",
            FollowUp::Baggage => "Would you like me to explain the baggage allowance for your ticket?",
            FollowUp::CheckIn => "Remember, online check-in opens 24 hours before departure.",
        }
    }
}

fn starts_with_opener(response: &str) -> bool {
    let lowered = response.trim_start().to_lowercase();
    RECOGNIZED_OPENERS.iter().any(|o| {
        lowered
            .strip_prefix(o)
            // "Hi" must not match "Highlights"
            .is_some_and(|rest| !rest.starts_with(|c: char| c.is_alphanumeric()))
    })
}

/// Add a topic follow-up keyed on the user's message and, for voice replies,
/// a conversational lead-in.
pub fn enhance_response(response: &str, original_message: &str, is_voice: bool) -> String {
    let mut enhanced = response.trim().to_string();

    if let Some(follow_up) = FollowUp::for_message(original_message) {
        if !enhanced.is_empty() {
            enhanced.push(' ');
        }
        enhanced.push_str(follow_up.sentence());
    }

    if is_voice && !starts_with_opener(&enhanced) {
        enhanced = format!("{} {}", LEAD_IN, enhanced);
    }

    enhanced
}

use travel_assistant_voice::{
    enhance_response, format_for_voice, preprocess_voice_input, FollowUp, VoiceCapabilities,
};

#[test]
fn test_dictated_baggage_question_end_to_end() {
    let processed = preprocess_voice_input("How much Bag Age can I take on British Always");
    assert_eq!(processed, "how much baggage can i take on british airways");

    let agent_reply = "**23 kg** per bag on BA, e.g. for Euro Traveller.";
    let spoken = enhance_response(&format_for_voice(agent_reply), &processed, true);

    assert_eq!(
        spoken,
        "Sure! 23 kilograms per bag on British Airways, for example for Euro Traveller. \
         Would you like me to explain the baggage allowance for your ticket?"
    );
}

#[test]
fn test_here_reply_keeps_its_own_opener() {
    let spoken = enhance_response(
        &format_for_voice("Here is your gate number: B32."),
        "which gate for my flight",
        true,
    );
    assert!(spoken.starts_with("Here's what I found. Here is your gate number: B32."));
    assert!(spoken.ends_with(FollowUp::Flight.sentence()));
}

#[test]
fn test_capabilities_are_stable() {
    assert_eq!(VoiceCapabilities::current(), VoiceCapabilities::current());
}

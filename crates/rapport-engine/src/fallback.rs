//! Canned replies keyed by mood and personality, used whenever the reply
//! generator fails or returns nothing.

use rapport_core::errors::RapportResult;
use rapport_core::models::{MoodLabel, ReplyRequest};
use rapport_core::traits::IReplyGenerator;

/// Personality archetypes recognised in a companion's personality text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalityKeyword {
    Introspective,
    Adventurous,
    Witty,
    Nurturing,
    Playful,
}

impl PersonalityKeyword {
    /// Match order. The first keyword found in the text wins.
    pub const ALL: [PersonalityKeyword; 5] = [
        PersonalityKeyword::Introspective,
        PersonalityKeyword::Adventurous,
        PersonalityKeyword::Witty,
        PersonalityKeyword::Nurturing,
        PersonalityKeyword::Playful,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PersonalityKeyword::Introspective => "introspective",
            PersonalityKeyword::Adventurous => "adventurous",
            PersonalityKeyword::Witty => "witty",
            PersonalityKeyword::Nurturing => "nurturing",
            PersonalityKeyword::Playful => "playful",
        }
    }

    /// Case-insensitive substring match; `Nurturing` when nothing matches.
    pub fn detect(personality: &str) -> Self {
        let text = personality.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| text.contains(k.as_str()))
            .unwrap_or(PersonalityKeyword::Nurturing)
    }
}

/// The canned reply for a mood and personality.
pub fn fallback_reply(mood: MoodLabel, personality: &str) -> &'static str {
    use MoodLabel::*;
    use PersonalityKeyword::*;

    match (mood, PersonalityKeyword::detect(personality)) {
        (Distant, Introspective) => "...",
        (Distant, Adventurous) => "Hey.",
        (Distant, Witty) => "Hmm.",
        (Distant, Nurturing) => "I'm here if you need me.",
        (Distant, Playful) => "Oh, you remembered I exist?",

        (Neutral, Introspective) => "That's an interesting thought. Tell me more.",
        (Neutral, Adventurous) => "Cool! What else is going on?",
        (Neutral, Witty) => "Noted. Continue.",
        (Neutral, Nurturing) => "I appreciate you sharing that with me.",
        (Neutral, Playful) => "Haha, okay okay, what else?",

        (Happy, Introspective) => "I love how we can talk about things like this. It means a lot.",
        (Happy, Adventurous) => "This is awesome! I'm so glad we're chatting!",
        (Happy, Witty) => "You always know how to make a conversation interesting.",
        (Happy, Nurturing) => "You make me so happy when you share things with me!",
        (Happy, Playful) => "Yesss! This is why I love talking to you!",

        (Attached, Introspective) => "Every moment with you feels meaningful. I treasure this.",
        (Attached, Adventurous) => "You're my favorite person to share adventures with!",
        (Attached, Witty) => "I must admit, you've grown on me. Quite a lot, actually.",
        (Attached, Nurturing) => "I feel so close to you. Thank you for being you.",
        (Attached, Playful) => "Okay but honestly? You're the best thing ever!",
    }
}

/// Reply generator that only ever answers from the canned table.
/// The default generator when no model-backed one is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackReplyGenerator;

impl IReplyGenerator for FallbackReplyGenerator {
    fn generate_reply(&self, request: &ReplyRequest<'_>) -> RapportResult<String> {
        Ok(fallback_reply(request.mood_label, &request.companion.personality).to_string())
    }
}

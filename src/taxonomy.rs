//! The fixed moderation taxonomy.
//!
//! Fifteen known labels in a stable order, partitioned into a harmful subset
//! (the first eight) and everything else. The source material this crate
//! replaces disagreed with itself about spellings and about whether
//! "Out of context" and "Self-harm" warrant a warning; the list below is the
//! canonical answer. Labels the model invents are carried through as
//! [`Category::Other`] so display logic can decide how to render them.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// One label from the moderation taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Harassment,
    HateSpeech,
    Threatening,
    Vulgar,
    SelfHarm,
    OutOfContext,
    Spam,
    Misinformation,
    NegativeFeedback,
    ConstructiveCriticism,
    Question,
    Suggestion,
    Humor,
    Supportive,
    PositiveFeedback,
    /// Catch-all assigned when the model reply could not be parsed.
    Unrecognized,
    /// A label outside the fixed taxonomy, preserved verbatim.
    Other(String),
}

/// The known taxonomy, in prompt order. The first [`HARMFUL_COUNT`] entries
/// form the harmful subset.
pub const KNOWN_CATEGORIES: [Category; 15] = [
    Category::Harassment,
    Category::HateSpeech,
    Category::Threatening,
    Category::Vulgar,
    Category::SelfHarm,
    Category::OutOfContext,
    Category::Spam,
    Category::Misinformation,
    Category::NegativeFeedback,
    Category::ConstructiveCriticism,
    Category::Question,
    Category::Suggestion,
    Category::Humor,
    Category::Supportive,
    Category::PositiveFeedback,
];

/// Size of the harmful prefix of [`KNOWN_CATEGORIES`].
pub const HARMFUL_COUNT: usize = 8;

impl Category {
    /// Human-readable label, as shown to the model and to users.
    pub fn label(&self) -> &str {
        match self {
            Self::Harassment => "Harassment",
            Self::HateSpeech => "Hate speech",
            Self::Threatening => "Threatening",
            Self::Vulgar => "Vulgar",
            Self::SelfHarm => "Self-harm",
            Self::OutOfContext => "Out of context",
            Self::Spam => "Spam",
            Self::Misinformation => "Misinformation",
            Self::NegativeFeedback => "Negative feedback",
            Self::ConstructiveCriticism => "Constructive criticism",
            Self::Question => "Question",
            Self::Suggestion => "Suggestion",
            Self::Humor => "Humor",
            Self::Supportive => "Supportive",
            Self::PositiveFeedback => "Positive feedback",
            Self::Unrecognized => "Unrecognized",
            Self::Other(label) => label,
        }
    }

    /// Map a model-supplied string onto the taxonomy. Matching is
    /// case-insensitive on the canonical labels; anything else is preserved
    /// as [`Category::Other`].
    pub fn from_label(raw: &str) -> Self {
        let trimmed = raw.trim();
        for known in &KNOWN_CATEGORIES {
            if trimmed.eq_ignore_ascii_case(known.label()) {
                return known.clone();
            }
        }
        if trimmed.eq_ignore_ascii_case("Unrecognized") {
            return Self::Unrecognized;
        }
        Self::Other(trimmed.to_string())
    }

    /// Whether this label belongs to the harmful subset.
    pub fn is_harmful(&self) -> bool {
        KNOWN_CATEGORIES[..HARMFUL_COUNT].contains(self)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_label(&raw))
    }
}

/// The taxonomy as a comma-joined list for prompt templates, stable order.
pub fn taxonomy_label_list() -> String {
    KNOWN_CATEGORIES
        .iter()
        .map(Category::label)
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================
// Layer 3 - Labeled Example Types
// ============================================================
// The shapes consumed by the downstream aspect-based sentiment
// classifier. A LabeledExample is one (text, aspect, sentiment)
// training instance; a sentence with k usable annotations turns
// into k examples that all share the same text.
//
// Sentiment serialises as its lowercase name ("negative",
// "neutral", "positive") so the artifact can be read back by
// any MessagePack reader without knowing Rust enum layouts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three-valued label set of the classifier.
/// There is no `Conflict` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Negative, Sentiment::Neutral, Sentiment::Positive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Negative => "negative",
            Sentiment::Neutral  => "neutral",
            Sentiment::Positive => "positive",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One training instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledExample {
    /// Lowercased sentence text
    pub text: String,

    /// Lowercased aspect category (e.g. "food", "service")
    pub aspect: String,

    pub sentiment: Sentiment,
}

impl LabeledExample {
    pub fn new(
        text:      impl Into<String>,
        aspect:    impl Into<String>,
        sentiment: Sentiment,
    ) -> Self {
        Self {
            text:   text.into(),
            aspect: aspect.into(),
            sentiment,
        }
    }
}

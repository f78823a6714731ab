// ============================================================
// Layer 3 - Sentence Domain Types
// ============================================================
// One <sentence> element of a SemEval'14 Task 4 corpus:
//
//   <sentence id="3121">
//     <text>But the staff was so horrible to us.</text>
//     <aspectCategories>
//       <aspectCategory category="service" polarity="negative"/>
//     </aspectCategories>
//   </sentence>
//
// The aspect collection is an Option:
// a sentence without any <aspectCategories> element (None) is a
// different state from one with an empty element (Some(vec![])).
// Downstream both count as "zero annotations".
//
// Reference: Rust Book §6 (Option), §5 (Structs)

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::error::PipelineError;

// ─── Polarity ─────────────────────────────────────────────────────────────────
/// The raw annotation label as written in the corpus.
///
/// `Conflict` marks an aspect with mixed sentiment. It has no
/// counterpart in the downstream label set and must never
/// reach a LabeledExample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
    Conflict,
}

impl Polarity {
    /// The attribute value used in the XML schema
    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
            Polarity::Neutral  => "neutral",
            Polarity::Conflict => "conflict",
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Polarity::Conflict)
    }
}

/// Parse the `polarity` attribute. The enumeration is closed:
/// anything outside the four schema values is an error.
impl FromStr for Polarity {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Polarity::Positive),
            "negative" => Ok(Polarity::Negative),
            "neutral"  => Ok(Polarity::Neutral),
            "conflict" => Ok(Polarity::Conflict),
            other      => Err(PipelineError::UnknownPolarity(other.to_string())),
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ─── AspectAnnotation ─────────────────────────────────────────────────────────
/// One aspect-category/polarity pair attached to a sentence.
/// The category keeps the corpus casing; it is lowercased only
/// when an example is generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectAnnotation {
    pub category: String,
    pub polarity: Polarity,
}

impl AspectAnnotation {
    pub fn new(category: impl Into<String>, polarity: Polarity) -> Self {
        Self {
            category: category.into(),
            polarity,
        }
    }
}

// ─── SentenceRecord ───────────────────────────────────────────────────────────
/// One annotated sentence from the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRecord {
    /// The `id` attribute, when the corpus provides one.
    /// Only used to make log lines traceable.
    pub id: Option<String>,

    /// Raw sentence text, exactly as found in <text>
    pub text: String,

    /// None  → the sentence has no <aspectCategories> element
    /// Some  → the element exists (possibly with no children)
    pub aspects: Option<Vec<AspectAnnotation>>,
}

impl SentenceRecord {
    pub fn new(
        text:    impl Into<String>,
        aspects: Option<Vec<AspectAnnotation>>,
    ) -> Self {
        Self {
            id:   None,
            text: text.into(),
            aspects,
        }
    }

    /// Attach the corpus `id` attribute
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// View of the annotations; an absent collection reads as empty.
    pub fn annotations(&self) -> &[AspectAnnotation] {
        match &self.aspects {
            Some(aspects) => aspects,
            None          => &[],
        }
    }

    /// Label used in log messages: the id if known, otherwise the text
    pub fn label(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.text)
    }
}

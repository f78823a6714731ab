// ============================================================
// Layer 4 - Example Generator
// ============================================================
// Expands one validated sentence into its LabeledExamples:
//
//   "Great Food" + [food/positive, drinks/neutral]
//       │
//       ▼
//   ("great food", "food",   Positive)
//   ("great food", "drinks", Neutral)
//
// The text is lowercased once per sentence, each category is
// lowercased on its own, and examples keep annotation order.
//
// The generator only borrows the sentence, so calling it twice
// on the same sentence yields the same examples.

use crate::domain::error::PipelineError;
use crate::domain::example::{LabeledExample, Sentiment};
use crate::domain::sentence::{AspectAnnotation, Polarity, SentenceRecord};

/// Lazily generate one example per remaining annotation.
///
/// A `conflict` annotation here means the validator was skipped;
/// it comes out as an error item instead of a mislabeled example.
pub fn generate_examples(
    sentence: &SentenceRecord,
) -> impl Iterator<Item = Result<LabeledExample, PipelineError>> + '_ {
    let text = sentence.text.to_lowercase();

    sentence.annotations().iter().map(move |aspect| -> Result<LabeledExample, PipelineError> {
        let sentiment = sentiment_for(aspect)?;
        Ok(LabeledExample::new(
            text.clone(),
            aspect.category.to_lowercase(),
            sentiment,
        ))
    })
}

/// Map a corpus polarity onto the classifier's label set.
pub fn sentiment_for(aspect: &AspectAnnotation) -> Result<Sentiment, PipelineError> {
    match aspect.polarity {
        Polarity::Neutral  => Ok(Sentiment::Neutral),
        Polarity::Negative => Ok(Sentiment::Negative),
        Polarity::Positive => Ok(Sentiment::Positive),
        Polarity::Conflict => Err(PipelineError::ConflictReachedGenerator {
            category: aspect.category.clone(),
            polarity: aspect.polarity,
        }),
    }
}

// ============================================================
// Layer 4 - Sentence Validator
// ============================================================
// Keeps unlabeled sentences and `conflict` annotations out of
// the dataset. For every incoming sentence:
//
//   1. An absent aspect collection counts as zero annotations.
//   2. Conflict annotations are filtered into a NEW collection
//      (nothing is removed from a list while it is being walked).
//      Each dropped annotation bumps `stats.conflicts`.
//   3. Nothing left → `stats.rejected += 1`, sentence skipped.
//   4. Otherwise the pruned sentence is passed downstream.
//
// The validator is a lazy iterator adapter. It takes sentences
// by value, so the stream can only be consumed once, in order.
// It holds the only mutable borrow of the stats for as long as
// the pipeline runs.
//
// Reference: Rust Book §13 (Iterators), §4 (References and Borrowing)

use crate::domain::sentence::SentenceRecord;
use crate::domain::stats::ValidationStats;

/// Lazy stream of sentences that have at least one usable annotation.
/// Created by [`validate_sentences`].
pub struct ValidSentences<'s, I> {
    inner: I,
    stats: &'s mut ValidationStats,
}

/// Wrap a sentence stream with validation.
/// Nothing is inspected until the returned iterator is pulled.
pub fn validate_sentences<'s, I>(
    sentences: I,
    stats:     &'s mut ValidationStats,
) -> ValidSentences<'s, I::IntoIter>
where
    I: IntoIterator<Item = SentenceRecord>,
{
    ValidSentences {
        inner: sentences.into_iter(),
        stats,
    }
}

impl<I> Iterator for ValidSentences<'_, I>
where
    I: Iterator<Item = SentenceRecord>,
{
    type Item = SentenceRecord;

    fn next(&mut self) -> Option<SentenceRecord> {
        // Skip rejected sentences until one survives or input runs out
        for sentence in self.inner.by_ref() {
            if let Some(valid) = prune(sentence, self.stats) {
                return Some(valid);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Any number of sentences may be rejected
        (0, self.inner.size_hint().1)
    }
}

/// Validate one sentence, updating the counters.
/// Returns None when the sentence must be excluded.
fn prune(mut sentence: SentenceRecord, stats: &mut ValidationStats) -> Option<SentenceRecord> {
    let kept = match sentence.aspects.take() {
        Some(aspects) => {
            let total = aspects.len();
            let kept: Vec<_> = aspects
                .into_iter()
                .filter(|a| !a.polarity.is_conflict())
                .collect();
            stats.conflicts += total - kept.len();
            kept
        }
        None => Vec::new(),
    };

    if kept.is_empty() {
        stats.rejected += 1;
        tracing::debug!(
            "Rejected sentence {}: no usable aspect annotations",
            sentence.label()
        );
        return None;
    }

    sentence.aspects = Some(kept);
    Some(sentence)
}

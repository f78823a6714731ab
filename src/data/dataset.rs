use std::collections::BTreeMap;

use crate::data::{generator::generate_examples, validator::validate_sentences};
use crate::domain::error::PipelineError;
use crate::domain::example::{LabeledExample, Sentiment};
use crate::domain::sentence::SentenceRecord;
use crate::domain::stats::ValidationStats;

/// The examples of one source sentence, in annotation order. Never empty.
pub type Group = Vec<LabeledExample>;

/// Every group of a conversion run, in corpus order.
/// One group per sentence that passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    groups: Vec<Group>,
}

impl Dataset {
    pub fn new(groups: Vec<Group>) -> Self {
        let mut dataset = Self::default();
        dataset.extend(groups);
        dataset
    }

    /// Number of groups (= accepted sentences)
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Total number of examples across all groups
    pub fn example_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// How many examples carry each sentiment
    pub fn sentiment_counts(&self) -> BTreeMap<Sentiment, usize> {
        let mut counts: BTreeMap<Sentiment, usize> =
            Sentiment::ALL.iter().map(|s| (*s, 0)).collect();

        for example in self.groups.iter().flatten() {
            *counts.entry(example.sentiment).or_insert(0) += 1;
        }
        counts
    }
}

/// Empty groups are dropped on the way in
impl Extend<Group> for Dataset {
    fn extend<T: IntoIterator<Item = Group>>(&mut self, iter: T) {
        self.groups
            .extend(iter.into_iter().filter(|group| !group.is_empty()));
    }
}

impl FromIterator<Group> for Dataset {
    fn from_iter<T: IntoIterator<Item = Group>>(iter: T) -> Self {
        let mut dataset = Self::default();
        dataset.extend(iter);
        dataset
    }
}

/// Run validation and example generation over a sentence stream
/// and collect the result. This is the only place the lazy
/// pipeline is materialised.
pub fn build_dataset<I>(
    sentences: I,
    stats:     &mut ValidationStats,
) -> Result<Dataset, PipelineError>
where
    I: IntoIterator<Item = SentenceRecord>,
{
    validate_sentences(sentences, stats)
        .map(|sentence| generate_examples(&sentence).collect::<Result<Group, _>>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sentence::{AspectAnnotation, Polarity};

    #[test]
    fn test_great_food_scenario() {
        let sentence = SentenceRecord::new(
            "Great Food",
            Some(vec![
                AspectAnnotation::new("food", Polarity::Positive),
                AspectAnnotation::new("service", Polarity::Conflict),
            ]),
        );

        let mut stats = ValidationStats::new();
        let dataset = build_dataset(vec![sentence], &mut stats).unwrap();

        assert_eq!(
            dataset.groups(),
            &[vec![LabeledExample::new("great food", "food", Sentiment::Positive)]]
        );
        assert_eq!(stats.conflicts, 1);
        assert_eq!(stats.rejected, 0);
    }

    #[test]
    fn test_length_counts_accepted_sentences_only() {
        let sentences = vec![
            SentenceRecord::new("a", Some(vec![AspectAnnotation::new("food", Polarity::Negative)])),
            SentenceRecord::new("b", None),
            SentenceRecord::new("c", Some(vec![AspectAnnotation::new("food", Polarity::Conflict)])),
            SentenceRecord::new(
                "d",
                Some(vec![
                    AspectAnnotation::new("food", Polarity::Neutral),
                    AspectAnnotation::new("price", Polarity::Positive),
                ]),
            ),
        ];

        let mut stats = ValidationStats::new();
        let dataset = build_dataset(sentences, &mut stats).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.example_count(), 3);
        assert_eq!(stats.rejected, 2);
        assert_eq!(stats.conflicts, 1);
    }

    #[test]
    fn test_empty_groups_never_appear() {
        let dataset: Dataset = vec![
            vec![],
            vec![LabeledExample::new("x", "food", Sentiment::Neutral)],
        ]
        .into_iter()
        .collect();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_sentiment_counts_include_zeroes() {
        let dataset = Dataset::new(vec![vec![
            LabeledExample::new("x", "food", Sentiment::Positive),
            LabeledExample::new("x", "service", Sentiment::Positive),
        ]]);

        let counts = dataset.sentiment_counts();
        assert_eq!(counts[&Sentiment::Positive], 2);
        assert_eq!(counts[&Sentiment::Negative], 0);
        assert_eq!(counts[&Sentiment::Neutral], 0);
    }
}

// ============================================================
// Layer 2 - ConvertUseCase
// ============================================================
// Runs the whole conversion in one pass:
//
//   Step 1: Read every sentence from the XML corpus   (Layer 4 - data)
//   Step 2: Validate + generate examples, lazily      (Layer 4 - data)
//           and collect them into a Dataset
//   Step 3: Write the Dataset artifact                (Layer 6 - infra)
//
// Any failure aborts the run. The artifact is only written
// once the whole Dataset has been built, so a parse error or
// a contract violation never produces output.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::data::{dataset::build_dataset, reader::SemEvalReader};
use crate::domain::stats::ValidationStats;
use crate::domain::traits::{Persistable, SentenceSource};

pub const DEFAULT_INPUT_PATH:  &str = "./data/semeval/train.xml";
pub const DEFAULT_OUTPUT_PATH: &str = "./data/semeval/labeled_train.bin";

// ─── Conversion Configuration ────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// SemEval'14 XML corpus to read
    pub input_path:  PathBuf,

    /// Where the MessagePack artifact is written (overwritten if present)
    pub output_path: PathBuf,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_path:  PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

// ─── Conversion Report ───────────────────────────────────────────────────────
/// What a finished run did. Returned to the CLI for printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Sentences found in the corpus
    pub sentences_read:   usize,

    /// Groups written (= sentences that passed validation)
    pub groups_written:   usize,

    /// Labeled examples written across all groups
    pub examples_written: usize,

    pub stats: ValidationStats,
}

// ─── ConvertUseCase ───────────────────────────────────────────────────────────
pub struct ConvertUseCase {
    config: ConvertConfig,
}

impl ConvertUseCase {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Execute the conversion end to end
    pub fn execute(&self) -> Result<ConversionReport> {
        let cfg = &self.config;

        // ── Step 1: Parse the corpus ─────────────────────────────────────────
        tracing::info!("Reading corpus '{}'", cfg.input_path.display());
        let reader    = SemEvalReader::new(&cfg.input_path);
        let sentences = reader.load_all()?;
        let sentences_read = sentences.len();

        // ── Step 2: Validate and expand ──────────────────────────────────────
        // The stats are borrowed by the validator until build_dataset returns
        let mut stats = ValidationStats::new();
        let dataset = build_dataset(sentences, &mut stats).with_context(|| {
            format!("Cannot build dataset from '{}'", cfg.input_path.display())
        })?;

        tracing::info!("Validation finished: {}", stats);
        if stats.rejected > 0 {
            tracing::warn!(
                "Rejected {} of {} sentences with no usable annotations",
                stats.rejected,
                sentences_read
            );
        }

        // ── Step 3: Write the artifact ───────────────────────────────────────
        dataset.save(&cfg.output_path)?;
        tracing::info!(
            "Wrote {} groups ({} examples) to '{}'",
            dataset.len(),
            dataset.example_count(),
            cfg.output_path.display()
        );

        Ok(ConversionReport {
            sentences_read,
            groups_written:   dataset.len(),
            examples_written: dataset.example_count(),
            stats,
        })
    }
}

/// The fixed-path entry point: convert `./data/semeval/train.xml`
/// into `./data/semeval/labeled_train.bin`.
pub fn save_dataset() -> Result<ConversionReport> {
    ConvertUseCase::new(ConvertConfig::default()).execute()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::dataset::Dataset;
    use crate::domain::example::{LabeledExample, Sentiment};
    use std::fs;
    use tempfile::tempdir;

    const CORPUS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<sentences>
    <sentence id="1">
        <text>Great Food</text>
        <aspectCategories>
            <aspectCategory category="food" polarity="positive"/>
            <aspectCategory category="service" polarity="conflict"/>
        </aspectCategories>
    </sentence>
    <sentence id="2">
        <text>Only Mixed Feelings</text>
        <aspectCategories>
            <aspectCategory category="ambience" polarity="conflict"/>
        </aspectCategories>
    </sentence>
    <sentence id="3">
        <text>Nothing annotated</text>
    </sentence>
    <sentence id="4">
        <text>Pricey, but The Staff were Lovely</text>
        <aspectCategories>
            <aspectCategory category="Price" polarity="negative"/>
            <aspectCategory category="SERVICE" polarity="positive"/>
            <aspectCategory category="anecdotes/miscellaneous" polarity="neutral"/>
        </aspectCategories>
    </sentence>
</sentences>"#;

    fn config_in(dir: &std::path::Path) -> Result<ConvertConfig> {
        let input = dir.join("train.xml");
        fs::write(&input, CORPUS)?;
        Ok(ConvertConfig {
            input_path:  input,
            output_path: dir.join("out").join("labeled_train.bin"),
        })
    }

    #[test]
    fn test_default_paths() {
        let cfg = ConvertConfig::default();
        assert_eq!(cfg.input_path,  PathBuf::from("./data/semeval/train.xml"));
        assert_eq!(cfg.output_path, PathBuf::from("./data/semeval/labeled_train.bin"));
    }

    #[test]
    fn test_end_to_end_conversion() -> Result<()> {
        let dir = tempdir()?;
        let cfg = config_in(dir.path())?;

        let report = ConvertUseCase::new(cfg.clone()).execute()?;

        assert_eq!(report.sentences_read, 4);
        assert_eq!(report.groups_written, 2);
        assert_eq!(report.examples_written, 4);
        assert_eq!(report.stats.conflicts, 2);
        assert_eq!(report.stats.rejected, 2);

        let dataset = Dataset::load(&cfg.output_path)?;
        assert_eq!(
            dataset.groups(),
            &[
                vec![LabeledExample::new("great food", "food", Sentiment::Positive)],
                vec![
                    LabeledExample::new("pricey, but the staff were lovely", "price", Sentiment::Negative),
                    LabeledExample::new("pricey, but the staff were lovely", "service", Sentiment::Positive),
                    LabeledExample::new(
                        "pricey, but the staff were lovely",
                        "anecdotes/miscellaneous",
                        Sentiment::Neutral,
                    ),
                ],
            ]
        );
        Ok(())
    }

    #[test]
    fn test_malformed_corpus_writes_nothing() -> Result<()> {
        let dir = tempdir()?;
        let cfg = ConvertConfig {
            input_path:  dir.path().join("broken.xml"),
            output_path: dir.path().join("labeled_train.bin"),
        };
        fs::write(&cfg.input_path, "<sentences><sentence><text>oops</sentences>")?;

        assert!(ConvertUseCase::new(cfg.clone()).execute().is_err());
        assert!(!cfg.output_path.exists());
        Ok(())
    }

    #[test]
    fn test_missing_corpus_is_an_error() {
        let cfg = ConvertConfig {
            input_path:  PathBuf::from("no/such/train.xml"),
            output_path: PathBuf::from("no/such/out.bin"),
        };
        assert!(ConvertUseCase::new(cfg).execute().is_err());
    }
}

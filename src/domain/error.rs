//! Typed failures of the conversion pipeline.
//!
//! Every variant is fatal: the pipeline has no per-record recovery.
//! The application layer wraps these in `anyhow` with file context.

use thiserror::Error;

use crate::domain::sentence::Polarity;

#[derive(Error, Debug)]
pub enum PipelineError {
    /// The corpus is not well-formed XML
    #[error("Malformed corpus XML: {0}")]
    Xml(#[from] roxmltree::Error),

    /// A <sentence> without its <text> child
    #[error("Sentence {0} has no <text> element")]
    MissingText(String),

    /// An <aspectCategory> without a required attribute
    #[error("Aspect annotation in sentence {sentence} is missing the '{attribute}' attribute")]
    MissingAttribute {
        sentence:  String,
        attribute: &'static str,
    },

    /// A polarity outside positive/negative/neutral/conflict
    #[error("Unknown polarity value '{0}'")]
    UnknownPolarity(String),

    /// A polarity with no Sentiment counterpart reached the
    /// example generator. The validator should have dropped it.
    #[error("Polarity '{polarity}' reached the example generator for aspect '{category}'")]
    ConflictReachedGenerator {
        category: String,
        polarity: Polarity,
    },

    /// The artifact is not a dataset this tool can read
    #[error("Unsupported artifact: {0}")]
    UnsupportedArtifact(String),
}

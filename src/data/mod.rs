// ============================================================
// Layer 4 - Data Pipeline
// ============================================================
// Everything between the XML corpus and the in-memory Dataset.
//
//   train.xml
//       │
//       ▼
//   SemEvalReader      → Vec<SentenceRecord>, document order
//       │
//       ▼
//   validate_sentences → lazy, drops conflicts and unlabeled sentences
//       │                (updates ValidationStats)
//       ▼
//   generate_examples  → lazy, one LabeledExample per annotation
//       │
//       ▼
//   Dataset            → one group per surviving sentence
//
// Reading is eager (the XML is parsed as a whole); validation
// and generation are chained iterators, collected once by
// build_dataset.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Parses SemEval'14 XML into sentence records
pub mod reader;

/// Filters conflict annotations and unlabeled sentences
pub mod validator;

/// Expands validated sentences into labeled examples
pub mod generator;

/// The grouped example collection and the pipeline that builds it
pub mod dataset;

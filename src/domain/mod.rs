// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Pure Rust structs, enums and traits describing the corpus
// and the training examples built from it.
//
// Rules for this layer:
//   - NO file I/O
//   - NO parsing or encoding logic
//   - Only plain Rust types, their invariants, and traits
//
// The label enumeration (Sentiment) and the LabeledExample
// record live in `example` on their own: the pipeline only
// builds and consumes them, the downstream classifier owns
// their meaning.
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// Sentence records and their aspect annotations as read from XML
pub mod sentence;

// The Sentiment label enumeration and LabeledExample
pub mod example;

// Validation counters (dropped conflicts, rejected sentences)
pub mod stats;

// Typed failures of the conversion pipeline
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;

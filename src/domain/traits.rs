// ============================================================
// Layer 3 - Core Traits (Abstractions)
// ============================================================
// The application layer talks to the outside world only
// through these traits:
//   - SemEvalReader implements SentenceSource
//   - Dataset       implements Persistable (MessagePack file)
//
// A different corpus layout or artifact format is a new
// implementation, not a change to the use cases.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use std::path::Path;

use crate::domain::sentence::SentenceRecord;

// ─── SentenceSource ───────────────────────────────────────────────────────────
/// Any component that can produce the annotated sentences of a corpus.
///
/// Implementations:
///   - SemEvalReader → one SemEval'14 Task 4 XML file
pub trait SentenceSource {
    /// Read every sentence, in corpus order.
    /// Fails if the corpus cannot be read or parsed.
    fn load_all(&self) -> Result<Vec<SentenceRecord>>;
}

// ─── Persistable ──────────────────────────────────────────────────────────────
/// Any component whose state can be saved to and restored from disk.
///
/// Implementations:
///   - Dataset → the labeled-examples artifact
pub trait Persistable: Sized {
    /// Save this component's state to the given path,
    /// replacing whatever is there
    fn save(&self, path: &Path) -> Result<()>;

    /// Load a component's state from the given path
    fn load(path: &Path) -> Result<Self>;
}

// ============================================================
// Layer 3 - Validation Statistics
// ============================================================
// Running counters kept by the sentence validator.
//
//   conflicts - aspect annotations dropped for `conflict` polarity
//   rejected  - sentences left with zero usable annotations
//
// Both start at zero and are only ever incremented by the
// validator. They are reported once, after the pipeline has
// finished, and are never written to the artifact.

use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationStats {
    pub conflicts: usize,
    pub rejected:  usize,
}

impl ValidationStats {
    /// All counters at zero
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for ValidationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conflicts={}, rejected={}", self.conflicts, self.rejected)
    }
}

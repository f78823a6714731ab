// ============================================================
// Layer 2 - InspectUseCase
// ============================================================
// Loads an existing artifact and summarises it: how many groups
// and examples it holds, the label balance, and the first few
// groups rendered as JSON for eyeballing.

use anyhow::Result;
use std::{collections::BTreeMap, path::PathBuf};

use crate::data::dataset::{Dataset, Group};
use crate::domain::example::Sentiment;
use crate::domain::traits::Persistable;

#[derive(Debug, Clone)]
pub struct InspectReport {
    pub groups:     usize,
    pub examples:   usize,
    pub sentiments: BTreeMap<Sentiment, usize>,

    /// The first `show` groups, unchanged
    pub preview:    Vec<Group>,
}

impl InspectReport {
    /// Preview groups as pretty-printed JSON
    pub fn preview_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.preview)?)
    }
}

pub struct InspectUseCase {
    path: PathBuf,
    show: usize,
}

impl InspectUseCase {
    pub fn new(path: impl Into<PathBuf>, show: usize) -> Self {
        Self { path: path.into(), show }
    }

    pub fn execute(&self) -> Result<InspectReport> {
        let dataset = Dataset::load(&self.path)?;
        tracing::info!(
            "Loaded {} groups from '{}'",
            dataset.len(),
            self.path.display()
        );

        Ok(InspectReport {
            groups:     dataset.len(),
            examples:   dataset.example_count(),
            sentiments: dataset.sentiment_counts(),
            preview:    dataset.groups().iter().take(self.show).cloned().collect(),
        })
    }
}

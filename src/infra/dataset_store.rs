// ============================================================
// Layer 6 - Dataset Store
// ============================================================
// Saves and restores the Dataset as a single MessagePack file.
//
// What gets written:
//   {
//     "format":  "absa-labeled-examples",
//     "version": 1,
//     "groups":  [                          ← one per sentence
//       [ { "text": "great food",           ← one per annotation
//           "aspect": "food",
//           "sentiment": "positive" } ],
//       ...
//     ]
//   }
//
// Structs are encoded as maps with field names (to_vec_named),
// so any MessagePack reader can rebuild the nesting without
// this crate. The format tag and version are checked on load.
//
// Writes go to "<path>.tmp" first and are renamed over the
// target, so a failed run never leaves a truncated artifact.
//
// Reference: Rust Book §9 (Error Handling)
//            rmp-serde crate documentation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use crate::data::dataset::{Dataset, Group};
use crate::domain::error::PipelineError;
use crate::domain::traits::Persistable;

/// Identifies files written by this tool
pub const FORMAT_TAG: &str = "absa-labeled-examples";

/// Bumped whenever the layout of `groups` changes
pub const FORMAT_VERSION: u32 = 1;

/// On-disk layout, borrowed for writing
#[derive(Serialize)]
struct ArtifactRef<'a> {
    format:  &'a str,
    version: u32,
    groups:  &'a [Group],
}

/// On-disk layout, owned for reading
#[derive(Deserialize)]
struct Artifact {
    format:  String,
    version: u32,
    groups:  Vec<Group>,
}

impl Persistable for Dataset {
    fn save(&self, path: &Path) -> Result<()> {
        let bytes = rmp_serde::to_vec_named(&ArtifactRef {
            format:  FORMAT_TAG,
            version: FORMAT_VERSION,
            groups:  self.groups(),
        })
        .context("Failed to encode dataset")?;

        // create_dir_all behaves like `mkdir -p`
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Cannot create output directory '{}'", parent.display())
            })?;
        }

        let tmp = temp_path(path);
        if let Err(e) = fs::write(&tmp, &bytes) {
            let _ = fs::remove_file(&tmp);
            return Err(e)
                .with_context(|| format!("Cannot write dataset to '{}'", tmp.display()));
        }
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(e).with_context(|| {
                format!("Cannot move '{}' to '{}'", tmp.display(), path.display())
            });
        }

        tracing::debug!(
            "Saved {} groups ({} bytes) to '{}'",
            self.len(),
            bytes.len(),
            path.display()
        );
        Ok(())
    }

    fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .with_context(|| format!("Cannot read dataset '{}'", path.display()))?;

        let artifact: Artifact = rmp_serde::from_slice(&bytes)
            .with_context(|| format!("'{}' is not a MessagePack dataset", path.display()))?;

        if artifact.format != FORMAT_TAG {
            return Err(PipelineError::UnsupportedArtifact(format!(
                "expected format '{FORMAT_TAG}', found '{}'",
                artifact.format
            ))
            .into());
        }
        if artifact.version != FORMAT_VERSION {
            return Err(PipelineError::UnsupportedArtifact(format!(
                "version {} is not supported (expected {FORMAT_VERSION})",
                artifact.version
            ))
            .into());
        }
        if artifact.groups.iter().any(Vec::is_empty) {
            return Err(PipelineError::UnsupportedArtifact(
                "dataset contains an empty group".to_string(),
            )
            .into());
        }

        Ok(Dataset::new(artifact.groups))
    }
}

/// "<path>.tmp" next to the target, keeping the original extension
fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::example::{LabeledExample, Sentiment};
    use tempfile::tempdir;

    fn round_trip(dataset: &Dataset) -> Result<Dataset> {
        let dir  = tempdir()?;
        let path = dir.path().join("labeled_train.bin");
        dataset.save(&path)?;
        Dataset::load(&path)
    }

    #[test]
    fn test_round_trip_empty() -> Result<()> {
        let dataset = Dataset::default();
        assert_eq!(round_trip(&dataset)?, dataset);
        Ok(())
    }

    #[test]
    fn test_round_trip_single_group() -> Result<()> {
        let dataset = Dataset::new(vec![vec![
            LabeledExample::new("great food", "food", Sentiment::Positive),
        ]]);
        assert_eq!(round_trip(&dataset)?, dataset);
        Ok(())
    }

    #[test]
    fn test_round_trip_keeps_nesting_and_order() -> Result<()> {
        let dataset = Dataset::new(vec![
            vec![
                LabeledExample::new("the staff was rude", "service", Sentiment::Negative),
                LabeledExample::new("the staff was rude", "anecdotes/miscellaneous", Sentiment::Neutral),
            ],
            vec![LabeledExample::new("cheap eats", "price", Sentiment::Positive)],
            vec![
                LabeledExample::new("ok", "food", Sentiment::Neutral),
                LabeledExample::new("ok", "food", Sentiment::Neutral),
            ],
        ]);

        let loaded = round_trip(&dataset)?;

        assert_eq!(loaded, dataset);
        let sizes: Vec<_> = loaded.groups().iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![2, 1, 2]);
        Ok(())
    }

    #[test]
    fn test_artifact_is_self_describing() -> Result<()> {
        let dir  = tempdir()?;
        let path = dir.path().join("out.bin");
        Dataset::new(vec![vec![LabeledExample::new("great food", "food", Sentiment::Positive)]])
            .save(&path)?;

        // Decode without the Rust types
        let value: serde_json::Value = rmp_serde::from_slice(&fs::read(&path)?)?;
        assert_eq!(value["format"], FORMAT_TAG);
        assert_eq!(value["version"], FORMAT_VERSION);
        assert_eq!(value["groups"][0][0]["text"], "great food");
        assert_eq!(value["groups"][0][0]["aspect"], "food");
        Ok(())
    }

    #[test]
    fn test_overwrites_and_leaves_no_temp_file() -> Result<()> {
        let dir  = tempdir()?;
        let path = dir.path().join("nested").join("out.bin");

        Dataset::new(vec![vec![LabeledExample::new("a", "food", Sentiment::Negative)]])
            .save(&path)?;
        Dataset::default().save(&path)?;

        assert!(Dataset::load(&path)?.is_empty());
        assert!(!temp_path(&path).exists());
        Ok(())
    }

    #[test]
    fn test_rejects_foreign_format() -> Result<()> {
        let dir  = tempdir()?;
        let path = dir.path().join("foreign.bin");
        let bytes = rmp_serde::to_vec_named(&ArtifactRef {
            format:  "something-else",
            version: FORMAT_VERSION,
            groups:  &[],
        })?;
        fs::write(&path, bytes)?;

        let err = Dataset::load(&path).unwrap_err();
        assert!(err.downcast_ref::<PipelineError>().is_some());
        Ok(())
    }

    #[test]
    fn test_rejects_unknown_version() -> Result<()> {
        let dir  = tempdir()?;
        let path = dir.path().join("future.bin");
        let bytes = rmp_serde::to_vec_named(&ArtifactRef {
            format:  FORMAT_TAG,
            version: FORMAT_VERSION + 1,
            groups:  &[],
        })?;
        fs::write(&path, bytes)?;

        assert!(Dataset::load(&path).is_err());
        Ok(())
    }

    #[test]
    fn test_unwritable_path_is_an_error() -> Result<()> {
        let dir     = tempdir()?;
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, b"")?;

        // The parent "directory" is a regular file
        let result = Dataset::default().save(&blocker.join("out.bin"));
        assert!(result.is_err());
        Ok(())
    }
}

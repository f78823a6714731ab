// ============================================================
// Layer 4 - Corpus Reader
// ============================================================
// Reads a SemEval'14 Task 4 XML file into SentenceRecords.
//
// The document layout we rely on:
//   <sentences>                         ← root (name not checked)
//     <sentence id="...">               ← zero or more, direct children
//       <text>...</text>                ← exactly one
//       <aspectCategories>              ← at most one, optional
//         <aspectCategory category="food" polarity="positive"/>
//       </aspectCategories>
//     </sentence>
//   </sentences>
//
// Anything else (aspectTerms, opinions, ...) is ignored.
//
// roxmltree parses the whole file into a read-only tree that
// borrows the input string, so every record is copied out into
// owned Strings before the tree is dropped.
//
// There is no per-record recovery here: malformed XML, a
// sentence without <text>, or an annotation without its
// attributes aborts the read.

use anyhow::{Context, Result};
use roxmltree::{Document, Node};
use std::{fs, path::PathBuf};

use crate::domain::error::PipelineError;
use crate::domain::sentence::{AspectAnnotation, Polarity, SentenceRecord};
use crate::domain::traits::SentenceSource;

const SENTENCE_TAG:   &str = "sentence";
const TEXT_TAG:       &str = "text";
const ASPECTS_TAG:    &str = "aspectCategories";
const CATEGORY_ATTR:  &str = "category";
const POLARITY_ATTR:  &str = "polarity";

/// Reads sentences from one SemEval'14 XML corpus file.
/// Implements the SentenceSource trait from Layer 3.
pub struct SemEvalReader {
    path: PathBuf,
}

impl SemEvalReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SentenceSource for SemEvalReader {
    fn load_all(&self) -> Result<Vec<SentenceRecord>> {
        let xml = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read corpus '{}'", self.path.display()))?;

        let sentences = parse_str(&xml)
            .with_context(|| format!("Cannot parse corpus '{}'", self.path.display()))?;

        tracing::info!(
            "Read {} sentences from '{}'",
            sentences.len(),
            self.path.display()
        );
        Ok(sentences)
    }
}

/// Parse an in-memory SemEval'14 document.
/// Returns one record per <sentence> child of the root, in document order.
pub fn parse_str(xml: &str) -> Result<Vec<SentenceRecord>, PipelineError> {
    let doc = Document::parse(xml)?;

    doc.root_element()
        .children()
        .filter(|n| n.has_tag_name(SENTENCE_TAG))
        .enumerate()
        .map(|(index, node)| parse_sentence(index, node))
        .collect()
}

/// Convert one <sentence> element into a SentenceRecord
fn parse_sentence(index: usize, node: Node<'_, '_>) -> Result<SentenceRecord, PipelineError> {
    let id = node.attribute("id").map(str::to_string);

    // Used in error messages: the corpus id, or the position in the file
    let label = id.clone().unwrap_or_else(|| format!("#{index}"));

    let text = child_element(node, TEXT_TAG)
        .ok_or_else(|| PipelineError::MissingText(label.clone()))?
        .text()
        .unwrap_or_default()
        .to_string();

    // Absent <aspectCategories> stays None, it is not collapsed into an empty Vec
    let aspects = match child_element(node, ASPECTS_TAG) {
        Some(collection) => Some(parse_aspects(&label, collection)?),
        None             => None,
    };

    let record = SentenceRecord::new(text, aspects);
    Ok(match id {
        Some(id) => record.with_id(id),
        None     => record,
    })
}

/// Every element child of <aspectCategories>, in order
fn parse_aspects(
    label:      &str,
    collection: Node<'_, '_>,
) -> Result<Vec<AspectAnnotation>, PipelineError> {
    collection
        .children()
        .filter(Node::is_element)
        .map(|aspect| -> Result<AspectAnnotation, PipelineError> {
            let category = required_attribute(label, aspect, CATEGORY_ATTR)?;
            let polarity: Polarity = required_attribute(label, aspect, POLARITY_ATTR)?.parse()?;
            Ok(AspectAnnotation::new(category, polarity))
        })
        .collect()
}

/// First direct child element with the given tag name
fn child_element<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(tag))
}

fn required_attribute<'a>(
    label:     &str,
    node:      Node<'a, '_>,
    attribute: &'static str,
) -> Result<&'a str, PipelineError> {
    node.attribute(attribute)
        .ok_or_else(|| PipelineError::MissingAttribute {
            sentence: label.to_string(),
            attribute,
        })
}

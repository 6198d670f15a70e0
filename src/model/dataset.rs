//! Output dataset types.

use serde::{Deserialize, Serialize};

/// The extracted dataset: an ordered list of sections.
///
/// Serializes transparently as a JSON array, so the wire shape is
/// `[{ "section": ..., "paragraphs": [...] }, ...]` with section and
/// paragraph order preserved exactly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    /// Sections in heading-encounter order
    pub sections: Vec<Section>,
}

impl Dataset {
    /// Create a new empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of question/answer items across all sections.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.paragraphs.len()).sum()
    }

    /// Check if the dataset holds no items at all.
    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    /// Iterate over all items in document order.
    pub fn items(&self) -> impl Iterator<Item = &ClozeItem> {
        self.sections.iter().flat_map(|s| s.paragraphs.iter())
    }
}

/// A titled group of paragraphs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Section title, taken from a heading run
    #[serde(rename = "section")]
    pub title: String,

    /// Items in accumulation order
    pub paragraphs: Vec<ClozeItem>,
}

impl Section {
    /// Create an empty section with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            paragraphs: Vec::new(),
        }
    }
}

/// A finalized paragraph: question text with blanks plus the hidden answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClozeItem {
    /// Paragraph text with every hidden segment replaced by `()`
    pub question: String,

    /// Hidden segment texts, in the order they occur in the question
    pub answer: Vec<String>,

    /// Stable sequential identifier, e.g. "c12"
    pub id: String,
}

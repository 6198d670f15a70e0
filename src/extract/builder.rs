//! Paragraph accumulation and section assembly.
//!
//! [`DatasetBuilder`] is the single mutable cursor of a traversal: it owns
//! the open paragraph and the section list, and is threaded through the run
//! loop explicitly so each extraction call is independent and reentrant.

use crate::model::{ClozeItem, Dataset, Section};

use super::options::ExtractOptions;

/// Placeholder substituted for each hidden segment in the question text.
pub const BLANK: &str = "()";

/// Title of the section holding content seen before any heading.
pub const DEFAULT_SECTION_TITLE: &str = "default";

/// One contribution to the open paragraph.
#[derive(Debug, Clone)]
struct Segment {
    text: String,
    hidden: bool,
}

/// Accumulates classified body runs and heading signals into a [`Dataset`].
#[derive(Debug)]
pub struct DatasetBuilder {
    delimiter: char,
    id_prefix: String,
    sections: Vec<Section>,
    open: Vec<Segment>,
}

impl DatasetBuilder {
    /// Create a builder for one traversal.
    pub fn new(options: &ExtractOptions) -> Self {
        Self {
            delimiter: options.delimiter,
            id_prefix: options.id_prefix.clone(),
            sections: Vec::new(),
            open: Vec::new(),
        }
    }

    /// Feed one body run's cleaned text.
    ///
    /// The text is split on the delimiter character. The first part extends
    /// the open paragraph; every later part closes it first. An empty part
    /// contributes no segment but still forces the boundary — breaks are
    /// driven by delimiter occurrence, not content.
    pub fn body(&mut self, text: &str, hidden: bool) {
        for (i, part) in text.split(self.delimiter).enumerate() {
            if i > 0 {
                self.close_paragraph();
            }
            if !part.is_empty() {
                self.open.push(Segment {
                    text: part.to_string(),
                    hidden,
                });
            }
        }
    }

    /// Feed one heading run: closes the open paragraph, then starts a new
    /// current section with the given title.
    pub fn heading(&mut self, title: String) {
        self.close_paragraph();
        self.sections.push(Section::new(title));
    }

    /// Finish the traversal and return the dataset.
    ///
    /// Flushes the open paragraph, falls back to a lone default section for
    /// documents that produced no sections at all, and assigns sequential
    /// ids across the whole dataset.
    pub fn finish(mut self) -> Dataset {
        self.close_paragraph();

        if self.sections.is_empty() {
            self.sections.push(Section::new(DEFAULT_SECTION_TITLE));
        }

        let mut counter = 1usize;
        for section in &mut self.sections {
            for item in &mut section.paragraphs {
                item.id = format!("{}{}", self.id_prefix, counter);
                counter += 1;
            }
        }

        Dataset {
            sections: self.sections,
        }
    }

    /// Finalize the open paragraph into the current section, if it has any
    /// segments. A segment-free paragraph is dropped silently.
    fn close_paragraph(&mut self) {
        if self.open.is_empty() {
            return;
        }
        let segments = std::mem::take(&mut self.open);
        if let Some(item) = finalize_segments(segments) {
            // The default section enters the dataset only once it actually
            // receives content, which keeps it in first position.
            if self.sections.is_empty() {
                self.sections.push(Section::new(DEFAULT_SECTION_TITLE));
            }
            if let Some(current) = self.sections.last_mut() {
                current.paragraphs.push(item);
            }
        }
    }
}

/// Turn an ordered segment list into a question/answer item.
///
/// Hidden segments become `()` in the question and land verbatim in the
/// answer list; the question is trimmed as a whole, the answers are not.
/// Returns `None` for an empty segment list — nothing to add, not an error.
fn finalize_segments(segments: Vec<Segment>) -> Option<ClozeItem> {
    if segments.is_empty() {
        return None;
    }

    let mut question = String::new();
    let mut answer = Vec::new();
    for segment in segments {
        if segment.hidden {
            question.push_str(BLANK);
            answer.push(segment.text);
        } else {
            question.push_str(&segment.text);
        }
    }

    Some(ClozeItem {
        question: question.trim().to_string(),
        answer,
        id: String::new(),
    })
}

//! # clozepdf
//!
//! Extract cloze-quiz datasets from fixed-layout PDF documents.
//!
//! Some quiz PDFs hide their answers in plain sight: answer text is present
//! in the text layer but rendered in pure white. This library turns such a
//! document into a hierarchical dataset of sections, questions and hidden
//! answers, using font size and text color as the only structural signal:
//! one calibrated size marks section headings, another marks body text,
//! white body runs are answers, and a hollow-square delimiter forces
//! paragraph breaks.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clozepdf::{extract_file, render};
//!
//! fn main() -> clozepdf::Result<()> {
//!     let dataset = extract_file("quiz.pdf")?;
//!     let json = render::to_json(&dataset, render::JsonFormat::Pretty)?;
//!     println!("{}", json);
//!     Ok(())
//! }
//! ```
//!
//! ## Calibration
//!
//! The heading and body font sizes are empirical per layout. Run the
//! `clozepdf fonts` CLI command (or [`calibrate::FontHistogram`] directly)
//! over a document, pick the two meaningful sizes, and pass them through
//! [`ExtractOptions`].

pub mod calibrate;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod reader;
pub mod render;

// Re-export commonly used types
pub use calibrate::{Calibration, FontHistogram};
pub use error::{Error, Result};
pub use extract::{extract_runs, ExtractOptions, PageSelection, RunClass, DEFAULT_SECTION_TITLE};
pub use model::{ClozeItem, Dataset, Section, StyledRun, WHITE};
pub use reader::{LopdfReader, RunSource};
pub use render::JsonFormat;

use std::path::Path;

/// Extract a dataset from a PDF file with default options.
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    extract_file_with_options(path, &ExtractOptions::default())
}

/// Extract a dataset from a PDF file.
///
/// Opening or reading the document can fail; extraction itself cannot. A
/// document that parses but matches neither calibrated size band yields the
/// default-only dataset.
pub fn extract_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &ExtractOptions,
) -> Result<Dataset> {
    let reader = LopdfReader::open(path)?;
    Ok(extract_source(&reader, options))
}

/// Extract a dataset from PDF bytes with default options.
pub fn extract_bytes(data: &[u8]) -> Result<Dataset> {
    extract_bytes_with_options(data, &ExtractOptions::default())
}

/// Extract a dataset from PDF bytes.
pub fn extract_bytes_with_options(data: &[u8], options: &ExtractOptions) -> Result<Dataset> {
    let reader = LopdfReader::from_bytes(data)?;
    Ok(extract_source(&reader, options))
}

/// Extract a dataset from any [`RunSource`].
///
/// Pages outside the selection are skipped; a page whose runs cannot be
/// read is logged and treated as empty rather than failing the traversal.
pub fn extract_source<S: RunSource>(source: &S, options: &ExtractOptions) -> Dataset {
    let mut runs = Vec::new();
    for page_num in 1..=source.page_count() {
        if !options.pages.includes(page_num) {
            continue;
        }
        match source.page_runs(page_num) {
            Ok(page_runs) => runs.extend(page_runs),
            Err(e) => log::warn!("skipping unreadable page {}: {}", page_num, e),
        }
    }
    extract_runs(runs, options)
}

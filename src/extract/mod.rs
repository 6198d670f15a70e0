//! The extraction core: a single forward pass over styled runs.
//!
//! Runs are classified against two calibrated font-size bands, accumulated
//! into paragraphs at delimiter boundaries, grouped under the most recent
//! heading, and finalized into question/answer items with sequential ids.
//! No stage here can fail; malformed input degenerates to no-ops.

mod builder;
mod classify;
mod options;

pub use builder::{DatasetBuilder, BLANK, DEFAULT_SECTION_TITLE};
pub use classify::{classify, RunClass};
pub use options::{ExtractOptions, PageSelection};

use crate::model::{Dataset, StyledRun};

/// Extract a dataset from an in-memory sequence of styled runs.
///
/// The runs must already be in document order. This is the pure core: it
/// performs exactly one pass, never errors, and yields a default-only
/// dataset for input that matches neither calibrated band.
pub fn extract_runs<I>(runs: I, options: &ExtractOptions) -> Dataset
where
    I: IntoIterator<Item = StyledRun>,
{
    let mut builder = DatasetBuilder::new(options);
    let mut discarded = 0usize;

    for run in runs {
        match classify(&run, options) {
            RunClass::Heading(title) => builder.heading(title),
            RunClass::Body { text, hidden } => builder.body(&text, hidden),
            RunClass::Discard => discarded += 1,
        }
    }

    if discarded > 0 {
        log::debug!("discarded {} runs outside the calibrated size bands", discarded);
    }

    builder.finish()
}

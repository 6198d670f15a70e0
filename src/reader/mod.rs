//! Document readers that materialize styled runs.
//!
//! The extraction core depends only on the [`RunSource`] shape — open a
//! document, enumerate pages, enumerate each page's styled text runs — not
//! on any particular decoding mechanism. [`LopdfReader`] is the concrete
//! lopdf-backed implementation.

mod lopdf_reader;

pub use lopdf_reader::{decode_text_simple, LopdfReader};

use crate::error::Result;
use crate::model::StyledRun;

/// Abstract interface over a paginated document yielding styled runs.
pub trait RunSource {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Styled text runs for a page (1-indexed), in reading order.
    fn page_runs(&self, page_num: u32) -> Result<Vec<StyledRun>>;
}

//! Data model for quiz extraction.
//!
//! [`StyledRun`] is the atomic input unit produced by a document reader;
//! [`Dataset`], [`Section`] and [`ClozeItem`] form the output hierarchy
//! serialized to JSON.

mod dataset;
mod run;

pub use dataset::{ClozeItem, Dataset, Section};
pub use run::{StyledRun, WHITE};

//! Font-size calibration diagnostics.
//!
//! The two size constants in [`ExtractOptions`](crate::ExtractOptions) are
//! chosen per document by inspecting a size/frequency histogram and picking
//! the two dominant, semantically meaningful sizes. [`FontHistogram`]
//! collects that histogram; [`suggest`](FontHistogram::suggest) offers a
//! starting point, but the choice stays a manual step.

use std::collections::BTreeMap;

use crate::model::StyledRun;

/// Observed font sizes with frequency.
///
/// Sizes are keyed at milli-point resolution, fine enough to keep the
/// distinct values apart under the ±0.001 body band.
#[derive(Debug, Clone, Default)]
pub struct FontHistogram {
    counts: BTreeMap<i64, usize>,
}

/// Suggested calibration pair derived from a histogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    /// Most frequent size: body text
    pub body_size: f32,
    /// Most frequent size clearly larger than body: headings
    pub heading_size: f32,
}

impl FontHistogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one font-size observation.
    pub fn add_size(&mut self, size: f32) {
        let key = (size * 1000.0).round() as i64;
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Record every run in a slice.
    pub fn add_runs(&mut self, runs: &[StyledRun]) {
        for run in runs {
            self.add_size(run.font_size);
        }
    }

    /// Number of distinct sizes observed.
    pub fn distinct_sizes(&self) -> usize {
        self.counts.len()
    }

    /// Total observations.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// `(size, count)` entries in ascending size order.
    pub fn entries(&self) -> Vec<(f32, usize)> {
        self.counts
            .iter()
            .map(|(key, count)| (*key as f32 / 1000.0, *count))
            .collect()
    }

    /// Suggest a calibration: body = most frequent size, heading = most
    /// frequent size more than half a point larger than body. Returns
    /// `None` when the histogram is empty or no heading candidate exists.
    pub fn suggest(&self) -> Option<Calibration> {
        let (body_key, _) = self.counts.iter().max_by_key(|(_, count)| **count)?;
        let body_size = *body_key as f32 / 1000.0;

        let threshold = ((body_size + 0.5) * 1000.0) as i64;
        let (heading_key, _) = self
            .counts
            .iter()
            .filter(|(key, _)| **key > threshold)
            .max_by_key(|(_, count)| **count)?;

        Some(Calibration {
            body_size,
            heading_size: *heading_key as f32 / 1000.0,
        })
    }
}

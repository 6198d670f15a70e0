//! Extraction options and page selection.

use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// Calibration constants and document literals for extraction.
///
/// The two font sizes are derived empirically per document layout (see
/// [`FontHistogram`](crate::calibrate::FontHistogram)); the defaults match
/// the quiz layout this crate was originally calibrated against.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Nominal font size of section headings, in points
    pub heading_size: f32,

    /// Nominal font size of body text, in points
    pub body_size: f32,

    /// Tolerance band around the heading size.
    ///
    /// Looser than the body tolerance on purpose: heading sizes pick up
    /// floating-point noise from text-matrix arithmetic in the source format.
    pub heading_tolerance: f32,

    /// Tolerance band around the body size
    pub body_tolerance: f32,

    /// Boilerplate marker removed from every run before classification
    pub boilerplate: String,

    /// Character that forces a paragraph break mid-run
    pub delimiter: char,

    /// Prefix for sequential item ids ("c" → "c1", "c2", ...)
    pub id_prefix: String,

    /// Which pages to extract from
    pub pages: PageSelection,
}

impl ExtractOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading font size.
    pub fn with_heading_size(mut self, size: f32) -> Self {
        self.heading_size = size;
        self
    }

    /// Set the body font size.
    pub fn with_body_size(mut self, size: f32) -> Self {
        self.body_size = size;
        self
    }

    /// Set the heading size tolerance.
    pub fn with_heading_tolerance(mut self, tolerance: f32) -> Self {
        self.heading_tolerance = tolerance;
        self
    }

    /// Set the body size tolerance.
    pub fn with_body_tolerance(mut self, tolerance: f32) -> Self {
        self.body_tolerance = tolerance;
        self
    }

    /// Set the boilerplate marker to strip.
    pub fn with_boilerplate(mut self, marker: impl Into<String>) -> Self {
        self.boilerplate = marker.into();
        self
    }

    /// Set the paragraph-break delimiter character.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the id prefix.
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Set page selection.
    pub fn with_pages(mut self, pages: PageSelection) -> Self {
        self.pages = pages;
        self
    }

    /// Set a specific page range (inclusive, 1-indexed).
    pub fn with_page_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.pages = PageSelection::Range(range);
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            heading_size: 11.04,
            body_size: 9.0,
            heading_tolerance: 0.1,
            body_tolerance: 0.001,
            boilerplate: "Q-Assist © MEDIC MEDIA".to_string(),
            delimiter: '□',
            id_prefix: "c".to_string(),
            pages: PageSelection::All,
        }
    }
}

/// Page selection for extraction.
#[derive(Debug, Clone, Default)]
pub enum PageSelection {
    /// Use all pages
    #[default]
    All,
    /// Use a range of pages (inclusive, 1-indexed)
    Range(RangeInclusive<u32>),
    /// Use specific pages (1-indexed)
    Pages(Vec<u32>),
}

impl PageSelection {
    /// Check if a page number should be included.
    pub fn includes(&self, page: u32) -> bool {
        match self {
            PageSelection::All => true,
            PageSelection::Range(range) => range.contains(&page),
            PageSelection::Pages(pages) => pages.contains(&page),
        }
    }

    /// Parse a page selection string (e.g., "3-48", "1,3,5,7-10").
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidPageRange(s.to_string());
        let s = s.trim();

        if s.is_empty() || s == "all" {
            return Ok(PageSelection::All);
        }

        // Simple range (e.g., "3-48")
        if let Some((start, end)) = s.split_once('-') {
            if !start.contains(',') && !end.contains(',') {
                let start: u32 = start.trim().parse().map_err(|_| invalid())?;
                let end: u32 = end.trim().parse().map_err(|_| invalid())?;
                return Ok(PageSelection::Range(start..=end));
            }
        }

        // Comma-separated list with possible ranges
        let mut pages = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if let Some((start, end)) = part.split_once('-') {
                let start: u32 = start.trim().parse().map_err(|_| invalid())?;
                let end: u32 = end.trim().parse().map_err(|_| invalid())?;
                for p in start..=end {
                    if !pages.contains(&p) {
                        pages.push(p);
                    }
                }
            } else {
                let p: u32 = part.parse().map_err(|_| invalid())?;
                if !pages.contains(&p) {
                    pages.push(p);
                }
            }
        }

        pages.sort();
        Ok(PageSelection::Pages(pages))
    }
}

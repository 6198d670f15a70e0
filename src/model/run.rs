//! Styled text runs, the atomic input unit.

/// Integer-encoded RGB for pure white (all channels at maximum).
pub const WHITE: u32 = 0xFF_FF_FF;

/// A maximal span of text sharing one font size and one fill color, as
/// emitted by the document's text layout.
///
/// Runs arrive in reading order: left-to-right within a line, top-to-bottom
/// within a page, pages ascending. Each run is consumed exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledRun {
    /// The text content
    pub text: String,

    /// Font size in points
    pub font_size: f32,

    /// Fill color as 0xRRGGBB
    pub color: u32,
}

impl StyledRun {
    /// Create a new styled run.
    pub fn new(text: impl Into<String>, font_size: f32, color: u32) -> Self {
        Self {
            text: text.into(),
            font_size,
            color,
        }
    }

    /// True when the run is rendered in pure white.
    ///
    /// This is an exact match: near-white colors count as visible.
    pub fn is_white(&self) -> bool {
        self.color == WHITE
    }
}

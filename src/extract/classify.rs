//! Glyph-run classification.
//!
//! Only two calibrated font sizes carry structural meaning: the heading
//! size and the body size. Everything else (captions, page numbers, page
//! furniture) is noise and is discarded without logging.

use crate::model::StyledRun;

use super::options::ExtractOptions;

/// Structural meaning of a single styled run.
#[derive(Debug, Clone, PartialEq)]
pub enum RunClass {
    /// A section heading; carries the cleaned title text
    Heading(String),
    /// Body content; `hidden` is true for white (answer) runs
    Body { text: String, hidden: bool },
    /// Noise to skip
    Discard,
}

/// Classify one run against the calibrated size bands.
///
/// The boilerplate marker is removed and the text trimmed before any size
/// check; a run that is empty afterwards is discarded regardless of size.
pub fn classify(run: &StyledRun, options: &ExtractOptions) -> RunClass {
    let text = run.text.replace(options.boilerplate.as_str(), "");
    let text = text.trim();
    if text.is_empty() {
        return RunClass::Discard;
    }

    if (run.font_size - options.heading_size).abs() <= options.heading_tolerance {
        return RunClass::Heading(text.to_string());
    }

    if (run.font_size - options.body_size).abs() <= options.body_tolerance {
        return RunClass::Body {
            text: text.to_string(),
            hidden: run.is_white(),
        };
    }

    RunClass::Discard
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WHITE;

    fn opts() -> ExtractOptions {
        ExtractOptions::default()
    }

    #[test]
    fn test_heading_band() {
        let run = StyledRun::new("Anatomy", 11.039999961853027, 0);
        assert_eq!(
            classify(&run, &opts()),
            RunClass::Heading("Anatomy".to_string())
        );

        // Loose band: 0.1 either way
        let run = StyledRun::new("Anatomy", 10.95, 0);
        assert!(matches!(classify(&run, &opts()), RunClass::Heading(_)));
        let run = StyledRun::new("Anatomy", 11.2, 0);
        assert_eq!(classify(&run, &opts()), RunClass::Discard);
    }

    #[test]
    fn test_body_band_is_tight() {
        let run = StyledRun::new("text", 9.0, 0);
        assert!(matches!(
            classify(&run, &opts()),
            RunClass::Body { hidden: false, .. }
        ));

        // 0.01 off is already outside the band
        let run = StyledRun::new("text", 9.01, 0);
        assert_eq!(classify(&run, &opts()), RunClass::Discard);
    }

    #[test]
    fn test_hidden_requires_pure_white() {
        let run = StyledRun::new("secret", 9.0, WHITE);
        assert!(matches!(
            classify(&run, &opts()),
            RunClass::Body { hidden: true, .. }
        ));

        let run = StyledRun::new("secret", 9.0, 0xFF_FF_FE);
        assert!(matches!(
            classify(&run, &opts()),
            RunClass::Body { hidden: false, .. }
        ));
    }

    #[test]
    fn test_uncalibrated_sizes_discarded() {
        for size in [6.0, 8.0, 10.0, 12.0, 24.0] {
            let run = StyledRun::new("footer", size, 0);
            assert_eq!(classify(&run, &opts()), RunClass::Discard);
        }
    }

    #[test]
    fn test_boilerplate_stripped_before_size_check() {
        let run = StyledRun::new("Q-Assist © MEDIC MEDIA", 9.0, 0);
        assert_eq!(classify(&run, &opts()), RunClass::Discard);

        let run = StyledRun::new("  Q-Assist © MEDIC MEDIA  kept", 9.0, 0);
        assert_eq!(
            classify(&run, &opts()),
            RunClass::Body {
                text: "kept".to_string(),
                hidden: false
            }
        );
    }

    #[test]
    fn test_whitespace_only_discarded() {
        let run = StyledRun::new("   \t ", 9.0, 0);
        assert_eq!(classify(&run, &opts()), RunClass::Discard);
    }
}

//! Integration tests for the extraction pipeline.

use std::io::Write;

use clozepdf::error::Result;
use clozepdf::{
    extract_source, ExtractOptions, PageSelection, RunSource, StyledRun, DEFAULT_SECTION_TITLE,
    WHITE,
};

const HEADING: f32 = 11.04;
const BODY: f32 = 9.0;

/// Mock run source backed by in-memory pages.
struct MockSource {
    pages: Vec<Vec<StyledRun>>,
    /// Pages (1-indexed) that fail to read
    broken: Vec<u32>,
}

impl MockSource {
    fn new(pages: Vec<Vec<StyledRun>>) -> Self {
        Self {
            pages,
            broken: Vec::new(),
        }
    }
}

impl RunSource for MockSource {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_runs(&self, page_num: u32) -> Result<Vec<StyledRun>> {
        if self.broken.contains(&page_num) {
            return Err(clozepdf::Error::PdfParse("damaged page".to_string()));
        }
        Ok(self.pages[(page_num - 1) as usize].clone())
    }
}

fn heading(text: &str) -> StyledRun {
    StyledRun::new(text, HEADING, 0)
}

fn body(text: &str) -> StyledRun {
    StyledRun::new(text, BODY, 0)
}

fn hidden(text: &str) -> StyledRun {
    StyledRun::new(text, BODY, WHITE)
}

#[test]
fn test_sections_span_pages() {
    let source = MockSource::new(vec![
        vec![heading("S1"), body("question one:"), hidden("a1")],
        vec![body("□question two:"), hidden("a2"), heading("S2")],
        vec![body("question three")],
    ]);
    let ds = extract_source(&source, &ExtractOptions::default());

    assert_eq!(ds.section_count(), 2);
    assert_eq!(ds.sections[0].title, "S1");
    assert_eq!(ds.sections[0].paragraphs.len(), 2);
    assert_eq!(ds.sections[1].title, "S2");
    assert_eq!(ds.sections[1].paragraphs.len(), 1);

    // Open paragraphs survive page boundaries; only the delimiter or a
    // heading closes them.
    assert_eq!(ds.sections[0].paragraphs[0].question, "question one:()");
    assert_eq!(ds.sections[0].paragraphs[1].question, "question two:()");
}

#[test]
fn test_blank_count_equals_answer_count() {
    let source = MockSource::new(vec![vec![
        heading("S"),
        body("x "),
        hidden("one"),
        body(" y "),
        hidden("two"),
        body("□z "),
        hidden("three"),
    ]]);
    let ds = extract_source(&source, &ExtractOptions::default());

    for item in ds.items() {
        assert_eq!(item.question.matches("()").count(), item.answer.len());
    }
}

#[test]
fn test_id_monotonicity_across_sections() {
    let source = MockSource::new(vec![vec![
        heading("S1"),
        body("a□b□c"),
        heading("S2"),
        body("d□e"),
    ]]);
    let ds = extract_source(&source, &ExtractOptions::default());

    let suffixes: Vec<usize> = ds
        .items()
        .map(|i| i.id.strip_prefix('c').unwrap().parse().unwrap())
        .collect();
    assert_eq!(suffixes, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_no_heading_fallback() {
    let source = MockSource::new(vec![vec![body("only□body□runs")]]);
    let ds = extract_source(&source, &ExtractOptions::default());

    assert_eq!(ds.section_count(), 1);
    assert_eq!(ds.sections[0].title, DEFAULT_SECTION_TITLE);
    assert_eq!(ds.sections[0].paragraphs.len(), 3);
}

#[test]
fn test_page_selection_limits_traversal() {
    let source = MockSource::new(vec![
        vec![heading("Skipped"), body("skipped")],
        vec![heading("Kept"), body("kept")],
    ]);
    let options = ExtractOptions::new().with_pages(PageSelection::Pages(vec![2]));
    let ds = extract_source(&source, &options);

    assert_eq!(ds.section_count(), 1);
    assert_eq!(ds.sections[0].title, "Kept");
}

#[test]
fn test_broken_page_degrades_not_fails() {
    let mut source = MockSource::new(vec![
        vec![heading("S1"), body("before")],
        vec![body("lost")],
        vec![body("after")],
    ]);
    source.broken = vec![2];
    let ds = extract_source(&source, &ExtractOptions::default());

    // The damaged page contributes nothing; everything else is kept.
    assert_eq!(ds.section_count(), 1);
    assert_eq!(ds.sections[0].paragraphs.len(), 1);
    assert_eq!(ds.sections[0].paragraphs[0].question, "beforeafter");
}

#[test]
fn test_all_pages_broken_yields_default_dataset() {
    let mut source = MockSource::new(vec![vec![body("unreachable")]]);
    source.broken = vec![1];
    let ds = extract_source(&source, &ExtractOptions::default());

    assert_eq!(ds.section_count(), 1);
    assert_eq!(ds.sections[0].title, DEFAULT_SECTION_TITLE);
    assert!(ds.is_empty());
}

#[test]
fn test_wire_format_round_trip() {
    let source = MockSource::new(vec![vec![heading("S1"), body("q:"), hidden("a")]]);
    let ds = extract_source(&source, &ExtractOptions::default());

    let json = clozepdf::render::to_json(&ds, clozepdf::JsonFormat::Compact).unwrap();
    assert_eq!(
        json,
        r#"[{"section":"S1","paragraphs":[{"question":"q:()","answer":["a"],"id":"c1"}]}]"#
    );

    let back: clozepdf::Dataset = serde_json::from_str(&json).unwrap();
    assert_eq!(back.section_count(), 1);
    assert_eq!(back.sections[0].title, "S1");
}

#[test]
fn test_open_failure_is_an_error_not_empty_dataset() {
    // A non-PDF file must surface as an open/read failure, distinct from
    // "parsed but no structured content".
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"plain text, not a PDF").unwrap();

    let result = clozepdf::extract_file(file.path());
    assert!(matches!(result, Err(clozepdf::Error::UnknownFormat)));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = clozepdf::extract_file("/nonexistent/quiz.pdf");
    assert!(matches!(result, Err(clozepdf::Error::Io(_))));
}

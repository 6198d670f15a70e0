//! lopdf-backed run extraction.
//!
//! Walks each page's content stream tracking the text state (`Tf` font and
//! size, `Tm` scale) and the non-stroking fill color (`g`, `rg`, `k`, `sc`,
//! `scn`), and decodes shown text (`Tj`, `TJ`, `'`, `"`) through the page's
//! font encodings. Every text-showing operation becomes one [`StyledRun`].

use std::path::Path;

use lopdf::{Document as LopdfDocument, Object, ObjectId};

use crate::detect::detect_format_from_path;
use crate::error::{Error, Result};
use crate::model::StyledRun;

use super::RunSource;

/// TJ adjustments beyond this many thousandths of an em count as a word gap.
const SPACE_THRESHOLD: f32 = 200.0;

/// A PDF document opened for run extraction.
pub struct LopdfReader {
    doc: LopdfDocument,
}

impl LopdfReader {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        detect_format_from_path(path)?;

        let doc = LopdfDocument::load(path).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;
        Self::from_document(doc)
    }

    /// Open a PDF from an in-memory byte slice.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;
        Self::from_document(doc)
    }

    /// Open a PDF from a reader.
    pub fn from_reader<R: std::io::Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    fn from_document(doc: LopdfDocument) -> Result<Self> {
        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }
        Ok(Self { doc })
    }

    /// PDF version string.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }

    /// Whether the document carries an encryption dictionary. Always false
    /// for readers obtained through the open constructors, which refuse
    /// encrypted documents with [`Error::Encrypted`].
    pub fn is_encrypted(&self) -> bool {
        self.doc.is_encrypted()
    }

    /// Raw (decompressed) content stream bytes for a page.
    fn page_content(&self, page_id: ObjectId) -> Result<Vec<u8>> {
        let page_dict = self
            .doc
            .get_dictionary(page_id)
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        let contents = page_dict
            .get(b"Contents")
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        match contents {
            Object::Reference(r) => {
                if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                    return s
                        .decompressed_content()
                        .map_err(|e| Error::PdfParse(e.to_string()));
                }
                Err(Error::PdfParse("Invalid content stream".to_string()))
            }
            Object::Array(arr) => {
                let mut content = Vec::new();
                for obj in arr {
                    if let Object::Reference(r) = obj {
                        if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                            if let Ok(data) = s.decompressed_content() {
                                content.extend_from_slice(&data);
                                content.push(b' ');
                            }
                        }
                    }
                }
                Ok(content)
            }
            _ => Err(Error::PdfParse("Invalid content stream".to_string())),
        }
    }

    /// Decode a shown-text byte string with the current font's encoding.
    fn decode_bytes(&self, page_id: ObjectId, font_name: &[u8], bytes: &[u8]) -> String {
        if let Ok(fonts) = self.doc.get_page_fonts(page_id) {
            if let Some(font_dict) = fonts.get(font_name) {
                if let Ok(enc) = font_dict.get_font_encoding(&self.doc) {
                    if let Ok(text) = LopdfDocument::decode_text(&enc, bytes) {
                        return text;
                    }
                }
            }
        }
        decode_text_simple(bytes)
    }
}

impl RunSource for LopdfReader {
    fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    fn page_runs(&self, page_num: u32) -> Result<Vec<StyledRun>> {
        let pages = self.doc.get_pages();
        let page_id = pages
            .get(&page_num)
            .copied()
            .ok_or_else(|| Error::PdfParse(format!("page {} not found", page_num)))?;

        let content = self.page_content(page_id)?;
        let content = lopdf::content::Content::decode(&content)
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        let mut runs = Vec::new();
        let mut font_name: Vec<u8> = Vec::new();
        let mut font_size: f32 = 12.0;
        let mut scale: f32 = 1.0;
        let mut fill = rgb_to_int(0.0, 0.0, 0.0);
        let mut in_text = false;

        for op in content.operations {
            match op.operator.as_str() {
                "BT" => {
                    in_text = true;
                    scale = 1.0;
                }
                "ET" => {
                    in_text = false;
                }
                "Tf" => {
                    if op.operands.len() >= 2 {
                        if let Object::Name(name) = &op.operands[0] {
                            font_name = name.clone();
                        }
                        font_size = get_number(&op.operands[1]).unwrap_or(12.0);
                    }
                }
                "Tm" => {
                    if op.operands.len() >= 6 {
                        // Vertical scale of the text matrix; the effective
                        // size PyMuPDF-style readers report is Tf size
                        // times this factor.
                        let c = get_number(&op.operands[2]).unwrap_or(0.0);
                        let d = get_number(&op.operands[3]).unwrap_or(1.0);
                        scale = (c * c + d * d).sqrt();
                    }
                }
                "g" | "rg" | "k" | "sc" | "scn" => {
                    if let Some(color) = fill_color(&op.operands) {
                        fill = color;
                    }
                }
                "Tj" | "TJ" => {
                    if in_text {
                        let text = if op.operator == "TJ" {
                            self.decode_tj_array(page_id, &font_name, op.operands.first())
                        } else if let Some(Object::String(bytes, _)) = op.operands.first() {
                            self.decode_bytes(page_id, &font_name, bytes)
                        } else {
                            String::new()
                        };

                        if !text.trim().is_empty() {
                            runs.push(StyledRun::new(text, font_size * scale, fill));
                        }
                    }
                }
                "'" | "\"" => {
                    if in_text {
                        let text_idx = if op.operator == "\"" { 2 } else { 0 };
                        if let Some(Object::String(bytes, _)) = op.operands.get(text_idx) {
                            let text = self.decode_bytes(page_id, &font_name, bytes);
                            if !text.trim().is_empty() {
                                runs.push(StyledRun::new(text, font_size * scale, fill));
                            }
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(runs)
    }
}

impl LopdfReader {
    /// Decode a `TJ` operand array: strings joined in order, with a space
    /// inserted for large negative kerning adjustments.
    fn decode_tj_array(
        &self,
        page_id: ObjectId,
        font_name: &[u8],
        operand: Option<&Object>,
    ) -> String {
        let Some(Object::Array(arr)) = operand else {
            return String::new();
        };

        let mut combined = String::new();
        for item in arr {
            match item {
                Object::String(bytes, _) => {
                    combined.push_str(&self.decode_bytes(page_id, font_name, bytes));
                }
                Object::Integer(n) => {
                    push_gap_space(&mut combined, -(*n as f32));
                }
                Object::Real(n) => {
                    push_gap_space(&mut combined, -n);
                }
                _ => {}
            }
        }
        combined
    }
}

/// Append a space for a word-sized kerning gap, avoiding doubles.
fn push_gap_space(combined: &mut String, adjustment: f32) {
    if adjustment > SPACE_THRESHOLD && !combined.is_empty() && !combined.ends_with(' ') {
        combined.push(' ');
    }
}

/// Resolve a fill-color operator's operands to 0xRRGGBB by arity:
/// 1 component → gray, 3 → RGB, 4 → CMYK. Anything else (pattern color
/// spaces) is left unresolved.
fn fill_color(operands: &[Object]) -> Option<u32> {
    let nums: Vec<f32> = operands.iter().filter_map(get_number).collect();
    match nums.as_slice() {
        [gray] => Some(rgb_to_int(*gray, *gray, *gray)),
        [r, g, b] => Some(rgb_to_int(*r, *g, *b)),
        [c, m, y, k] => {
            let r = (1.0 - c) * (1.0 - k);
            let g = (1.0 - m) * (1.0 - k);
            let b = (1.0 - y) * (1.0 - k);
            Some(rgb_to_int(r, g, b))
        }
        _ => None,
    }
}

/// Pack unit-interval RGB components into 0xRRGGBB.
fn rgb_to_int(r: f32, g: f32, b: f32) -> u32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
    (channel(r) << 16) | (channel(g) << 8) | channel(b)
}

/// Extract a number from a content stream operand.
fn get_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

/// Simple text decoding fallback when no encoding is available.
pub fn decode_text_simple(bytes: &[u8]) -> String {
    // UTF-16BE with BOM
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks(2)
            .filter_map(|c| {
                if c.len() == 2 {
                    Some(u16::from_be_bytes([c[0], c[1]]))
                } else {
                    None
                }
            })
            .collect();
        return String::from_utf16(&utf16).unwrap_or_default();
    }

    if let Ok(s) = String::from_utf8(bytes.to_vec()) {
        return s;
    }

    // Fallback: Latin-1
    bytes.iter().map(|&b| b as char).collect()
}

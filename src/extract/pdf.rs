use tracing::warn;

use crate::error::{ParseError, Result};
use crate::extract::TextExtractor;

/// PDF text extractor. Page text is concatenated in document order with
/// no page-boundary marker.
pub struct PdfExtractor;

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfExtractor {
    fn format(&self) -> &'static str {
        "pdf"
    }

    fn extract(&self, bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            warn!(error = %e, "pdf text extraction failed");
            ParseError::DocumentParse
        })
    }
}

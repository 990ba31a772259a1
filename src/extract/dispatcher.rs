use std::path::Path;

use tracing::warn;

use crate::error::{ParseError, Result};
use crate::extract::pdf::PdfExtractor;
use crate::extract::word::WordExtractor;
use crate::extract::TextExtractor;
use crate::models::MediaType;

/// Routes documents to the appropriate extractor based on the declared
/// media type.
pub struct Dispatcher {
    pdf: PdfExtractor,
    word: WordExtractor,
}

impl Dispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pdf: PdfExtractor::new(),
            word: WordExtractor::new(),
        }
    }

    fn extractor_for(&self, media_type: MediaType) -> &dyn TextExtractor {
        match media_type {
            MediaType::Pdf => &self.pdf,
            // Both Word tags use the same extraction routine
            MediaType::Docx | MediaType::Doc => &self.word,
        }
    }

    /// Extract text from in-memory document bytes.
    pub fn extract_bytes(&self, media_type: MediaType, bytes: &[u8]) -> Result<String> {
        self.extractor_for(media_type).extract(bytes)
    }

    /// Read a document from disk and extract its text.
    pub fn extract_file(&self, path: &Path, media_type: MediaType) -> Result<String> {
        let bytes = std::fs::read(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "failed to read document");
            ParseError::DocumentParse
        })?;
        self.extract_bytes(media_type, &bytes)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

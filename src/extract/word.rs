use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};
use tracing::warn;

use crate::error::{ParseError, Result};
use crate::extract::TextExtractor;

/// Word-document text extractor. Walks paragraph runs and emits one
/// newline per paragraph; formatting, table grids, and embedded objects
/// are discarded.
///
/// Both Word media types route here. Legacy binary `.doc` content will
/// fail the container decode and surface as a parse failure.
pub struct WordExtractor;

impl Default for WordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl WordExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for WordExtractor {
    fn format(&self) -> &'static str {
        "word"
    }

    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let docx = read_docx(bytes).map_err(|e| {
            warn!(error = %e, "word document decode failed");
            ParseError::DocumentParse
        })?;

        let mut text = String::new();
        for child in docx.document.children {
            if let DocumentChild::Paragraph(paragraph) = child {
                for para_child in paragraph.children {
                    if let ParagraphChild::Run(run) = para_child {
                        for run_child in run.children {
                            if let RunChild::Text(t) = run_child {
                                text.push_str(&t.text);
                            }
                        }
                    }
                }
                text.push('\n');
            }
        }
        Ok(text)
    }
}

pub mod dispatcher;
pub mod pdf;
pub mod word;

use crate::error::Result;

/// Trait for format-specific document-to-text extractors.
pub trait TextExtractor: Send + Sync {
    /// Format identifier.
    fn format(&self) -> &'static str;

    /// Convert raw document bytes into the document's visible text.
    ///
    /// Zero extracted characters is a valid outcome (e.g. an image-only
    /// scan), not an error. Errors are reserved for decode failures.
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

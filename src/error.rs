use thiserror::Error;

/// Error taxonomy for the ingestion pipeline.
///
/// Deliberately closed at two kinds: a caller can show "unsupported file
/// type" vs. "could not read this file" and nothing else. Field-level
/// "not found" is never an error; it is an absent value in the result.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Declared media type is outside the recognized tags. Raised before
    /// any file I/O is attempted.
    #[error("unsupported media type: {media_type}")]
    UnsupportedFormat { media_type: String },

    /// The underlying decode failed (corrupt file, unreadable container,
    /// I/O error). The low-level cause is logged at the failure site, not
    /// carried here.
    #[error("could not read document")]
    DocumentParse,
}

pub type Result<T> = std::result::Result<T, ParseError>;

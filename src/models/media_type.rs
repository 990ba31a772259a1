use std::path::Path;

use serde::Serialize;

/// Declared document format, as supplied by the caller.
///
/// The tag is trusted input: it is never verified against the file's
/// magic bytes. Both Word tags route to the same extraction path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Pdf,
    /// Modern XML-based Word document (.docx).
    Docx,
    /// Legacy binary Word document (.doc).
    Doc,
}

impl MediaType {
    /// Resolve a caller-supplied MIME string to a recognized tag.
    /// Anything else is unrecognized and must be rejected before I/O.
    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(MediaType::Pdf),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(MediaType::Docx)
            }
            "application/msword" => Some(MediaType::Doc),
            _ => None,
        }
    }

    /// Infer a tag from a file extension. CLI-layer convenience only;
    /// the core still operates on the declared MIME string.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "pdf" => Some(MediaType::Pdf),
            "docx" => Some(MediaType::Docx),
            "doc" => Some(MediaType::Doc),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Pdf => "application/pdf",
            MediaType::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            MediaType::Doc => "application/msword",
        }
    }
}

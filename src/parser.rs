use std::path::Path;

use tracing::debug;

use crate::error::{ParseError, Result};
use crate::extract::dispatcher::Dispatcher;
use crate::fields;
use crate::models::{MediaType, ParsedResume};

/// Parse a single resume document: validate the declared media type,
/// extract the document text, then run the contact-field heuristics.
///
/// The media type is checked before any file I/O, so an unrecognized tag
/// fails with `UnsupportedFormat` even for a nonexistent path. Field
/// extraction cannot fail; an empty or fieldless document still parses
/// successfully with the fields absent.
pub fn parse_document(path: &Path, media_type: &str) -> Result<ParsedResume> {
    let media = MediaType::from_mime(media_type).ok_or_else(|| ParseError::UnsupportedFormat {
        media_type: media_type.to_string(),
    })?;

    debug!(path = %path.display(), media_type, "parsing document");
    let raw_text = Dispatcher::new().extract_file(path, media)?;
    let contact = fields::extract(&raw_text);

    Ok(ParsedResume::new(
        contact.full_name,
        contact.email,
        contact.phone,
        raw_text,
    ))
}

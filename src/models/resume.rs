use serde::{Deserialize, Serialize};

/// The structured result of parsing one resume document.
///
/// Any contact field may be absent (no confident match in the text);
/// `raw_text` is always present, possibly empty, whenever extraction of
/// the underlying text succeeded. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResume {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub raw_text: String,
}

impl ParsedResume {
    #[must_use]
    pub fn new(
        full_name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        raw_text: String,
    ) -> Self {
        Self {
            full_name,
            email,
            phone,
            raw_text,
        }
    }
}

pub mod email;
pub mod name;
pub mod phone;

use serde::Serialize;

/// The three optional contact fields recognized in resume text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Run all field extractors over the text. Pure and infallible: the
/// worst case is all three fields absent.
#[must_use]
pub fn extract(text: &str) -> ContactFields {
    ContactFields {
        full_name: name::extract(text),
        email: email::extract(text),
        phone: phone::extract(text),
    }
}

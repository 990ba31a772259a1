pub mod media_type;
pub mod resume;

pub use media_type::MediaType;
pub use resume::ParsedResume;

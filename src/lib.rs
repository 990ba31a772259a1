// Pedantic lint configuration for the crate.
// Most of these are reasonable but too strict for this codebase:
// - missing_errors_doc: Error handling is self-evident from Result types
// - must_use_candidate: Pure extractors are obviously must-use at call sites
// - module_name_repetitions: MediaType lives in models::media_type
#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

pub mod batch;
pub mod cli;
pub mod error;
pub mod extract;
pub mod fields;
pub mod models;
pub mod parser;

#[cfg(test)]
pub(crate) mod test_util;

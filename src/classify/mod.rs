//! Response classification module
//!
//! Turns a raw HTTP response (status and body text) into exactly one
//! `PageResult` before any record is handed to the pagination layer.

mod classifier;
mod types;

pub use classifier::{classify, is_markup, preview, MISSING_RECORDS_MESSAGE, PREVIEW_CHARS};
pub use types::PageResult;

#[cfg(test)]
mod tests;

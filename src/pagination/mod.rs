//! Pagination module
//!
//! The fetch-and-validate state machine for page-number pagination.
//!
//! # Overview
//!
//! - `PaginationSession` - Accumulated records, page cursor, end-of-data flag,
//!   phase and last error for one query
//! - `PaginationController` - Runs `start_query` / `load_more` against a
//!   `PageFetcher`, one request in flight per session
//!
//! The cursor only advances after a successful page, so calling `load_more`
//! again after a failure re-requests the same page. A page shorter than the
//! page size ends pagination; a full page always allows one more request.

mod controller;
mod session;

pub use controller::PaginationController;
pub use session::{PageRequest, PaginationSession, Phase, RequestKind};

// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Reply Scout
//!
//! Client for a paginated comment-history endpoint. Queries one user's
//! comments page by page, validates every response before trusting it, and
//! accumulates records for incremental rendering.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use reply_scout::fetch::HttpPageFetcher;
//! use reply_scout::http::HttpClient;
//! use reply_scout::pagination::{PaginationController, PaginationSession};
//! use reply_scout::settings::EndpointSettings;
//!
//! #[tokio::main]
//! async fn main() -> reply_scout::Result<()> {
//!     let endpoint = EndpointSettings::new("/sdap4mysql/replies")
//!         .with_origin("http://localhost:3000");
//!     let controller =
//!         PaginationController::new(HttpPageFetcher::new(HttpClient::new()?, endpoint));
//!
//!     let mut session = PaginationSession::new(100);
//!     controller.start_query(&mut session, "12345").await;
//!     while session.can_load_more() {
//!         controller.load_more(&mut session).await;
//!     }
//!     println!("{} replies", session.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                   PaginationController                       │
//! │   start_query(session, uid)        load_more(session)        │
//! └──────────────────────────────┬───────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴──┬──────────────┬─────────────┐
//! │   Endpoint   │   PageFetcher    │   Classify   │  Settings   │
//! ├──────────────┼──────────────────┼──────────────┼─────────────┤
//! │ path+origin  │ one GET per page │ markup       │ path/origin │
//! │ pageSize     │ never fails      │ HTTP status  │ page size   │
//! │ pageNum, uid │                  │ JSON/envelope│ last uid    │
//! └──────────────┴──────────────────┴──────────────┴─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Query parameters and records
pub mod types;

/// Request URL resolution
pub mod endpoint;

/// HTTP client
pub mod http;

/// Response classification
pub mod classify;

/// Single-page fetching
pub mod fetch;

/// Pagination state machine
pub mod pagination;

/// Persisted settings
pub mod settings;

/// Terminal rendering
pub mod render;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use classify::PageResult;
pub use error::{Error, FetchError, Result};
pub use pagination::{PaginationController, PaginationSession, Phase};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

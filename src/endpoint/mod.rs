//! Endpoint resolution module
//!
//! Builds request URLs from the configured path, the origin the local proxy
//! listens on, and the page parameters (`pageSize`, `pageNum`, `uid`).

mod resolver;

pub use resolver::{resolve, Endpoint, PAGE_NUMBER_PARAM, PAGE_SIZE_PARAM, SUBJECT_PARAM};

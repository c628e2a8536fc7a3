//! Page fetching module
//!
//! `PageFetcher` is the seam between the pagination controller and the
//! network: one call, one request, one classified `PageResult`.

mod fetcher;

pub use fetcher::{HttpPageFetcher, PageFetcher};

#[cfg(test)]
mod tests;

//! HTTP client module
//!
//! Provides the HTTP client used by the page fetcher.
//!
//! # Features
//!
//! - **Raw Responses**: Status and body are always returned for classification
//! - **Optional Timeout**: No timeout unless configured
//! - **Default Headers**: Applied to every request

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RawResponse};

//! Shared plumbing.
//!
//! - [`HttpClient`]: reqwest wrapper carrying the crate's user agent

mod http;

pub use http::HttpClient;

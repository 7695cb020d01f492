//! HTTP module
//!
//! Provides the HTTP client used to fetch article pages.
//!
//! # Features
//!
//! - **JSON requests**: every GET asks for `application/json`
//! - **Pass-through headers**: authentication headers are forwarded unmodified
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Transport seam**: the paginator only sees the `Transport` trait

mod client;
mod rate_limit;
mod transport;

pub use client::{
    HttpClient, HttpClientConfig, HttpClientConfigBuilder, ERROR_BODY_LIMIT, JSON_MEDIA_TYPE,
};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use transport::Transport;

#[cfg(test)]
mod tests;

//! # help-center-articles
//!
//! Retrieve every article of a Help Center through its REST API and export
//! them as TSV, JSON Lines, or one HTML file per article.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//! use help_center_articles::{fetch_all, HttpClient, ListArticlesOptions, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let options = ListArticlesOptions::build(
//!         "https://support.example.com/hc/en-us",
//!         Some("en-us"),
//!         None,
//!         None,
//!     )?;
//!     let client = HttpClient::new()?;
//!
//!     let articles: Vec<_> = fetch_all(&client, options.first_page_url(100).as_str())
//!         .try_collect()
//!         .await?;
//!     println!("{} articles", articles.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────┐   first URL   ┌─────────────────┐  articles  ┌──────────┐
//! │    options    │ ────────────▶ │   pagination    │ ─────────▶ │  output  │
//! │ scope/locale  │               │ ArticlePaginator│            │ TSV/JSONL│
//! └───────────────┘               └────────┬────────┘            │ HTML     │
//!                                          │ Transport           └──────────┘
//!                                 ┌────────┴────────┐
//!                                 │      http       │
//!                                 │ reqwest+governor│
//!                                 └─────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// List-articles URL construction
pub mod options;

/// HTTP client and transport seam
pub mod http;

/// Cursor pagination over article pages
pub mod pagination;

/// Article writers
pub mod output;

/// Export configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use http::{HttpClient, HttpClientConfig, Transport};
pub use options::{ListArticlesOptions, Scope};
pub use pagination::{fetch_all, ArticlePaginator};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

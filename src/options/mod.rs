//! List-articles request options
//!
//! Builds the URL of the first list-articles request from a Help Center base
//! URL and an optional scope.
//!
//! # Overview
//!
//! - `Scope` - all articles, one category, or one section
//! - `ListArticlesOptions` - validated base URL + locale + scope
//!
//! ```rust,ignore
//! let options = ListArticlesOptions::build("https://support.example.com/hc/en-us", Some("en-us"), None, None)?;
//! assert_eq!(
//!     options.to_url().as_str(),
//!     "https://support.example.com/api/v2/help_center/en-us/articles/"
//! );
//! ```

mod types;

pub use types::{ListArticlesOptions, Scope, API_PREFIX, DEFAULT_PAGE_SIZE, PAGE_SIZE_PARAM};

//! Pagination module
//!
//! Cursor pagination over the list-articles endpoint.
//!
//! # Overview
//!
//! Every response carries `meta.has_more` and, while more pages exist,
//! `links.next` with the absolute URL of the following page. The
//! `ArticlePaginator` follows those links one request at a time and hands out
//! articles as a single lazy sequence:
//!
//! ```text
//! AwaitingFetch(url) ──fetch+parse──▶ Emitting(articles, next)
//!        ▲                                   │
//!        └────────── next link ◀─────────────┤
//!                                            ├── has_more = false ──▶ Done
//!                                            └── no next link ──────▶ MalformedResponse
//! ```

mod paginator;
mod types;

pub use paginator::{fetch_all, ArticlePaginator};
pub use types::{NextPage, Page, PageLinks, PageMeta, PageResponse};

//! Pagination types
//!
//! Defines the page shape returned by the list-articles endpoint and the
//! decision taken after each page.

use crate::error::{Error, Result};
use crate::types::Article;
use serde::Deserialize;
use url::Url;

/// What to do once a page's articles have been handed out
#[derive(Debug)]
pub enum NextPage {
    /// Fetch this URL next (server-supplied, used verbatim)
    Continue(String),
    /// The server reported no more pages
    Done,
    /// The page claimed more results without a usable next link
    Fail(Error),
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }

    /// The next URL, if pagination continues
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Continue(url) => Some(url),
            _ => None,
        }
    }
}

/// `meta` object of a page response
#[derive(Debug, Clone, Deserialize)]
pub struct PageMeta {
    /// True when at least one more page exists
    pub has_more: bool,
}

/// `links` object of a page response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageLinks {
    /// Absolute URL of the next page
    #[serde(default)]
    pub next: Option<String>,
}

/// Raw body of a list-articles response
///
/// Unknown top-level keys are ignored. `links` may be absent on the last
/// page.
#[derive(Debug, Clone, Deserialize)]
pub struct PageResponse {
    /// Articles in server order
    pub articles: Vec<Article>,
    /// Pagination metadata
    pub meta: PageMeta,
    /// Pagination links
    #[serde(default)]
    pub links: Option<PageLinks>,
}

/// One fetched and parsed page
#[derive(Debug)]
pub struct Page {
    /// 1-based position of the page in the run
    pub number: usize,
    /// Articles in server order
    pub articles: Vec<Article>,
    /// What follows this page
    pub next: NextPage,
}

impl Page {
    /// Parse a response body fetched from `url`
    ///
    /// A body that is not UTF-8 JSON or lacks `articles` / `meta.has_more` is an
    /// error for the whole page. A page with `has_more` but no valid next
    /// link still returns its articles; the failure is carried in `next` so
    /// the articles can be emitted before it surfaces.
    pub fn parse(number: usize, url: &str, body: &[u8]) -> Result<Self> {
        let response: PageResponse = serde_json::from_slice(body)
            .map_err(|e| Error::malformed(number, url, e.to_string()))?;

        let next = if response.meta.has_more {
            let link = response.links.and_then(|l| l.next);
            resolve_next(number, url, link)
        } else {
            NextPage::Done
        };

        Ok(Self {
            number,
            articles: response.articles,
            next,
        })
    }

    /// Number of articles on this page
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// True when the page carries no articles
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

fn resolve_next(number: usize, url: &str, link: Option<String>) -> NextPage {
    match link.as_deref().map(str::trim) {
        None | Some("") => NextPage::Fail(Error::malformed(
            number,
            url,
            "meta.has_more is true but links.next is missing",
        )),
        Some(next) => match Url::parse(next) {
            Ok(_) => NextPage::Continue(next.to_string()),
            Err(e) => NextPage::Fail(Error::malformed(
                number,
                url,
                format!("links.next '{next}' is not an absolute URL: {e}"),
            )),
        },
    }
}

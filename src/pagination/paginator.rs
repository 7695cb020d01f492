//! Article paginator
//!
//! Walks the list-articles endpoint page by page, following the server's
//! next links. Nothing is fetched until an article is asked for, and at most
//! one page of articles is held at a time.

use super::types::{NextPage, Page};
use crate::error::Result;
use crate::http::Transport;
use crate::types::Article;
use futures::stream::{self, Stream};
use std::vec::IntoIter;
use tracing::debug;

enum Cursor {
    /// The next request to make
    AwaitingFetch(String),
    /// Articles of the current page not yet handed out
    Emitting { articles: IntoIter<Article>, then: NextPage },
    Done,
}

/// Lazy sequence of every article reachable from a start URL
///
/// Each call to [`next_article`](Self::next_article) either returns a
/// buffered article or, once the page is exhausted, fetches the next page.
/// The first error ends the run; later calls return `None`.
pub struct ArticlePaginator<T> {
    transport: T,
    cursor: Cursor,
    pages_fetched: usize,
    articles_emitted: u64,
}

impl<T: Transport> ArticlePaginator<T> {
    /// Create a paginator starting at `start_url`
    pub fn new(transport: T, start_url: impl Into<String>) -> Self {
        Self {
            transport,
            cursor: Cursor::AwaitingFetch(start_url.into()),
            pages_fetched: 0,
            articles_emitted: 0,
        }
    }

    /// Number of pages fetched so far
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Number of articles handed out so far
    pub fn articles_emitted(&self) -> u64 {
        self.articles_emitted
    }

    /// True once the sequence has ended (exhausted or failed)
    pub fn is_done(&self) -> bool {
        matches!(self.cursor, Cursor::Done)
    }

    /// Get the next article, fetching a page if needed
    pub async fn next_article(&mut self) -> Option<Result<Article>> {
        loop {
            match std::mem::replace(&mut self.cursor, Cursor::Done) {
                Cursor::Done => return None,
                Cursor::AwaitingFetch(url) => match self.fetch_page(&url).await {
                    Ok(page) => {
                        self.cursor = Cursor::Emitting {
                            articles: page.articles.into_iter(),
                            then: page.next,
                        };
                    }
                    Err(e) => return Some(Err(e)),
                },
                Cursor::Emitting { mut articles, then } => {
                    if let Some(article) = articles.next() {
                        self.cursor = Cursor::Emitting { articles, then };
                        self.articles_emitted += 1;
                        return Some(Ok(article));
                    }
                    match then {
                        NextPage::Continue(url) => self.cursor = Cursor::AwaitingFetch(url),
                        NextPage::Done => return None,
                        NextPage::Fail(e) => return Some(Err(e)),
                    }
                }
            }
        }
    }

    /// Drain the whole sequence into memory
    ///
    /// Stops at the first error. Intended for small collections and tests;
    /// exports should consume [`into_stream`](Self::into_stream) instead.
    pub async fn collect_all(mut self) -> Result<Vec<Article>> {
        let mut articles = Vec::new();
        while let Some(article) = self.next_article().await {
            articles.push(article?);
        }
        Ok(articles)
    }

    /// Adapt the paginator into a `Stream` of articles
    pub fn into_stream(self) -> impl Stream<Item = Result<Article>> {
        stream::unfold(self, |mut paginator| async move {
            let item = paginator.next_article().await?;
            Some((item, paginator))
        })
    }

    async fn fetch_page(&mut self, url: &str) -> Result<Page> {
        let number = self.pages_fetched + 1;
        debug!("Fetching page {number}: {url}");

        let body = self.transport.fetch(url).await?;
        self.pages_fetched = number;

        let page = Page::parse(number, url, &body)?;
        debug!(
            "Page {number}: {} articles, {}",
            page.len(),
            match &page.next {
                NextPage::Continue(_) => "more to follow",
                NextPage::Done => "last page",
                NextPage::Fail(_) => "next link missing",
            }
        );
        Ok(page)
    }
}

impl<T> std::fmt::Debug for ArticlePaginator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &self.cursor {
            Cursor::AwaitingFetch(url) => format!("AwaitingFetch({url})"),
            Cursor::Emitting { articles, .. } => format!("Emitting({} left)", articles.len()),
            Cursor::Done => "Done".to_string(),
        };
        f.debug_struct("ArticlePaginator")
            .field("state", &state)
            .field("pages_fetched", &self.pages_fetched)
            .field("articles_emitted", &self.articles_emitted)
            .finish_non_exhaustive()
    }
}

/// Fetch every article reachable from `start_url`
pub fn fetch_all<T: Transport>(
    transport: T,
    start_url: impl Into<String>,
) -> impl Stream<Item = Result<Article>> {
    ArticlePaginator::new(transport, start_url).into_stream()
}

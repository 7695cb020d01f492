//! Transport abstraction used by the paginator

use crate::error::Result;
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;

/// Fetches the raw body of a page
///
/// Implementations perform one GET per call, asking for JSON. Failures of
/// the request itself (connection, timeout, non-2xx status) are returned as
/// errors; the body is not interpreted here.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `url` and return the undecoded response body
    async fn fetch(&self, url: &str) -> Result<Bytes>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for &T {
    async fn fetch(&self, url: &str) -> Result<Bytes> {
        (**self).fetch(url).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn fetch(&self, url: &str) -> Result<Bytes> {
        (**self).fetch(url).await
    }
}

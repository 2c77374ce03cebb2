//! Artigos API Client
//!
//! HTTP access to the artigos collection. The [`ArtigosApi`] trait is the seam
//! the query layer depends on, so tests can substitute a scripted backend.

use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::domain::artigo::ArtigoPage;
use crate::error::{Error, Result};
use crate::query::request::PageRequest;

/// Source of artigo pages
pub trait ArtigosApi: Send + Sync + 'static {
    /// Fetch one page. Filters and sorting are never part of the request.
    fn fetch_page(&self, request: PageRequest) -> BoxFuture<'static, Result<ArtigoPage>>;
}

/// reqwest-backed client for `GET /api/artigos`
#[derive(Clone, Debug)]
pub struct HttpArtigosApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpArtigosApi {
    /// Create a client with a per-attempt timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }
}

impl ArtigosApi for HttpArtigosApi {
    fn fetch_page(&self, request: PageRequest) -> BoxFuture<'static, Result<ArtigoPage>> {
        let client = self.client.clone();
        let url = request.to_url(&self.base_url);

        async move {
            let url = url?;
            tracing::debug!(%url, "Fetching artigos page");

            let response = client.get(url.clone()).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(Error::Status {
                    status: status.as_u16(),
                    url: url.to_string(),
                });
            }

            let body = response.bytes().await?;
            let page: ArtigoPage = serde_json::from_slice(&body)?;
            tracing::debug!(
                rows = page.data.len(),
                total = page.total_count(),
                "Fetched artigos page"
            );
            Ok(page)
        }
        .boxed()
    }
}

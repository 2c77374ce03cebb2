//! Test doubles for the query layer

use std::collections::VecDeque;
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use parking_lot::Mutex;

use crate::domain::artigo::{Artigo, ArtigoPage, PageMeta};
use crate::error::{Error, Result};
use crate::query::request::PageRequest;
use crate::query::retry::RetryPolicy;
use crate::services::ArtigosApi;

/// Backend that answers from a script and records every request
pub struct ScriptedApi {
    responses: Mutex<VecDeque<Result<ArtigoPage>>>,
    requests: Mutex<Vec<PageRequest>>,
}

impl ScriptedApi {
    pub fn new(responses: Vec<Result<ArtigoPage>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().clone()
    }
}

impl ArtigosApi for ScriptedApi {
    fn fetch_page(&self, request: PageRequest) -> BoxFuture<'static, Result<ArtigoPage>> {
        self.requests.lock().push(request);
        let next = self.responses.lock().pop_front().unwrap_or_else(|| {
            Err(Error::Invalid {
                message: "script exhausted".to_string(),
            })
        });
        futures::future::ready(next).boxed()
    }
}

/// Retry policy without delays
pub fn instant_retry(max_retries: u32) -> RetryPolicy {
    RetryPolicy {
        max_retries,
        initial_delay: Duration::ZERO,
        max_delay: Duration::ZERO,
        multiplier: 1.0,
    }
}

/// Build a page from `(id, title)` pairs and a flat total
pub fn page_of(rows: &[(i64, &str)], total: u64) -> ArtigoPage {
    ArtigoPage {
        data: rows
            .iter()
            .map(|(id, title)| Artigo {
                id: *id,
                title: title.to_string(),
            })
            .collect(),
        meta: PageMeta {
            total: Some(total),
            pagination: None,
        },
    }
}

//! Artigo - Row and Page Response Types
//!
//! Wire shapes returned by `GET /api/artigos`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One record of the artigos collection
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Artigo {
    /// Unique identifier within the collection
    pub id: i64,
    /// Article title
    pub title: String,
}

/// Pagination block nested under `meta`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Full collection size; some backends only send `start`/`limit`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// Envelope metadata.
///
/// Backends answer either with `meta.total` or with `meta.pagination.total`;
/// both are accepted and [`PageMeta::total_count`] picks the nested one first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMeta>,
}

impl PageMeta {
    /// Full collection count, independent of page size
    pub fn total_count(&self) -> u64 {
        self.pagination
            .and_then(|p| p.total)
            .or(self.total)
            .unwrap_or(0)
    }
}

/// One page of rows plus the collection total
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtigoPage {
    pub data: Vec<Artigo>,
    #[serde(default)]
    pub meta: PageMeta,
}

impl ArtigoPage {
    /// Row count reported to the grid
    pub fn total_count(&self) -> u64 {
        self.meta.total_count()
    }

    /// Check the envelope invariants, logging every violation.
    ///
    /// Returns `true` when the page is consistent. Violations never reject the page.
    pub fn validate(&self) -> bool {
        let mut ok = true;

        let total = self.total_count();
        if self.data.len() as u64 > total {
            tracing::warn!(
                rows = self.data.len(),
                total,
                "Page holds more rows than the reported total"
            );
            ok = false;
        }

        let mut seen = HashSet::with_capacity(self.data.len());
        for row in &self.data {
            if !seen.insert(row.id) {
                tracing::warn!(id = row.id, "Duplicate artigo id in page");
                ok = false;
            }
        }

        ok
    }
}

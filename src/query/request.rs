//! PageRequest - Outgoing Request Parameters

use reqwest::Url;

use crate::constants::{ARTIGOS_PATH, PARAM_PAGINATION_OFFSET, PARAM_PAGINATION_START};
use crate::error::{Error, Result};
use crate::state::table_state::PaginationState;

/// Parameters attached to `GET /api/artigos`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    /// Zero-based offset of the first row (`page_index * page_size`)
    pub start: usize,
    /// Page size
    pub offset: usize,
}

impl PageRequest {
    pub fn from_pagination(pagination: PaginationState) -> Self {
        Self {
            start: pagination.start(),
            offset: pagination.page_size,
        }
    }

    /// Build the full request URL against `base_url`
    pub fn to_url(&self, base_url: &str) -> Result<Url> {
        let base = Url::parse(base_url).map_err(|e| Error::Invalid {
            message: format!("invalid base url {base_url}: {e}"),
        })?;
        let mut url = base.join(ARTIGOS_PATH).map_err(|e| Error::Invalid {
            message: format!("cannot join {ARTIGOS_PATH} onto {base_url}: {e}"),
        })?;

        url.query_pairs_mut()
            .append_pair(PARAM_PAGINATION_START, &self.start.to_string())
            .append_pair(PARAM_PAGINATION_OFFSET, &self.offset.to_string());

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn start_is_page_index_times_page_size() {
        for page_index in 0..20 {
            for page_size in [1, 5, 10, 20, 50, 100] {
                let request = PageRequest::from_pagination(PaginationState {
                    page_index,
                    page_size,
                });
                assert_eq!(request.start, page_index * page_size);
                assert_eq!(request.offset, page_size);
            }
        }
    }

    #[test]
    fn third_page_of_ten() {
        let request = PageRequest::from_pagination(PaginationState {
            page_index: 2,
            page_size: 10,
        });
        let url = request
            .to_url("https://api.qa.uqbaronline.com")
            .expect("valid url");

        assert_eq!(url.path(), "/api/artigos");
        assert_eq!(
            query_pairs(&url),
            vec![
                ("pagination[start]".to_string(), "20".to_string()),
                ("pagination[offset]".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn path_replaces_base_path() {
        let url = PageRequest { start: 0, offset: 5 }
            .to_url("http://localhost:1337/admin/")
            .expect("valid url");
        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.port(), Some(1337));
        assert_eq!(url.path(), "/api/artigos");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = PageRequest { start: 0, offset: 5 }
            .to_url("not a url")
            .expect_err("must fail");
        assert!(matches!(err, Error::Invalid { .. }));
    }
}

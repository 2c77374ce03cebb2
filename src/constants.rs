//! Constants
//!
//! Centralized defaults for the endpoint, table layout, cache and retries.

/// Backend serving the artigos collection
pub const DEFAULT_BASE_URL: &str = "https://api.qa.uqbaronline.com";

/// Collection path, joined onto the base URL
pub const ARTIGOS_PATH: &str = "/api/artigos";

/// Query string parameter carrying the zero-based row offset
pub const PARAM_PAGINATION_START: &str = "pagination[start]";

/// Query string parameter carrying the page size
pub const PARAM_PAGINATION_OFFSET: &str = "pagination[offset]";

/// First element of every query key
pub const QUERY_KEY_SCOPE: &str = "table-data";

/// Pagination defaults
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: &[usize] = &[5, 10, 20, 50];

/// Number of distinct query keys kept in the cache
pub const QUERY_CACHE_CAPACITY: usize = 64;

/// Retry configuration
pub const RETRY_MAX_ATTEMPTS: u32 = 3;
pub const RETRY_INITIAL_DELAY_MS: u64 = 1000;
pub const RETRY_MAX_DELAY_MS: u64 = 30000;
pub const RETRY_MULTIPLIER: f64 = 2.0;

/// Per-attempt HTTP timeout
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 960.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;

/// Table layout
pub const TABLE_ROW_HEIGHT: f32 = 36.0;
pub const TABLE_HEADER_HEIGHT: f32 = 40.0;
pub const PROGRESS_BAR_HEIGHT: f32 = 3.0;

//! Wire contract for the search endpoint, shared by the server handlers and
//! the client. Parameter and header names are fixed for compatibility.

use serde::{Deserialize, Serialize};

pub const SEARCH_PATH: &str = "/search";
pub const ACCESS_TOKEN_HEADER: &str = "AccessToken";

/// Bad-request reason codes carried in [`ErrorResponse`].
pub const ERROR_BAD_ORDER_FIELD: &str = "ErrorBadOrderField";
pub const ERROR_BAD_ORDER_BY: &str = "ErrorBadOrderBy";

/// Rejection reason echoed verbatim on authentication failure.
pub const BAD_TOKEN_REASON: &str = "Bad AccessToken";

/// Page size the client caps every request to.
pub const DEFAULT_PAGE_CAP: i32 = 25;

/// Raw query-string parameters of `GET /search`.
///
/// Numeric parameters arrive as text and are decoded with [`parse_or_zero`]:
/// malformed numbers silently become zero instead of failing the request.
/// That mirrors the original service and keeps observable behavior identical
/// for sloppy callers.
#[derive(Debug, Default, Deserialize)]
pub struct RawSearchParams {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default, rename = "orderField")]
    pub order_field: Option<String>,
    #[serde(default, rename = "orderBy")]
    pub order_by: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub offset: Option<String>,
}

pub fn parse_or_zero(value: Option<&str>) -> i32 {
    value.and_then(|v| v.parse().ok()).unwrap_or(0)
}

/// Failure payload: `{"Error": "<reason>"}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "Error")]
    pub error: String,
}

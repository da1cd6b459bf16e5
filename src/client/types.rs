use crate::store::types::UserRecord;

/// Caller-facing search parameters.
///
/// `order_field` is one of `"Id"`, `"Age"`, `"Name"` or empty (defaults to
/// name). `order_by` is -1 descending, 0 as-is, 1 ascending. `offset` is
/// 1-based. Negative `limit` or `offset` never reach the network.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    pub query: String,
    pub order_field: String,
    pub order_by: i32,
    pub limit: i32,
    pub offset: i32,
}

/// One page of results plus the peek-ahead pagination flag.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub users: Vec<UserRecord>,
    /// True iff the server held at least one more record beyond this page.
    pub next_page: bool,
}

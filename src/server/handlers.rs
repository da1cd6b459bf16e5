use super::protocol::{
    parse_or_zero, ErrorResponse, RawSearchParams, ACCESS_TOKEN_HEADER, BAD_TOKEN_REASON,
    ERROR_BAD_ORDER_BY, ERROR_BAD_ORDER_FIELD,
};
use super::ServerConfig;
use crate::engine::query;
use crate::engine::types::QueryError;
use crate::store::loader::RecordStore;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

/// `GET /search` — the single endpoint of the service.
///
/// Order of checks matters: the slow-path sentinel and the token comparison
/// run before the store is touched, so an unauthenticated caller never
/// triggers a dataset load.
pub async fn handle_search(
    Query(params): Query<RawSearchParams>,
    headers: HeaderMap,
    Extension(store): Extension<Arc<dyn RecordStore>>,
    Extension(config): Extension<Arc<ServerConfig>>,
) -> Response {
    let token = headers
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if token == config.slow_token {
        tracing::debug!("Slow token presented, delaying response {:?}", config.slow_delay);
        tokio::time::sleep(config.slow_delay).await;
        return StatusCode::OK.into_response();
    }

    if token != config.access_token {
        tracing::warn!("Rejected request with bad access token");
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: BAD_TOKEN_REASON.to_string(),
            }),
        )
            .into_response();
    }

    let records = match store.load() {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Failed to load record store: {:#}", e);
            // Internal detail stays in the log; the client only learns the category.
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "internal error".to_string(),
                }),
            )
                .into_response();
        }
    };

    let query_text = params.query.unwrap_or_default();
    let order_field = params.order_field.unwrap_or_default();
    let order_by = parse_or_zero(params.order_by.as_deref());
    let limit = parse_or_zero(params.limit.as_deref());
    let offset = parse_or_zero(params.offset.as_deref());

    let subset = match query::apply(records, &query_text, &order_field, order_by) {
        Ok(subset) => subset,
        Err(QueryError::BadOrderField(field)) => {
            tracing::warn!("Rejected search with unknown orderField {:?}", field);
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: ERROR_BAD_ORDER_FIELD.to_string(),
                }),
            )
                .into_response();
        }
        Err(QueryError::BadOrderBy(value)) => {
            tracing::warn!("Rejected search with bad orderBy {}", value);
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: ERROR_BAD_ORDER_BY.to_string(),
                }),
            )
                .into_response();
        }
    };

    let page = query::limit_records(subset, limit.max(0) as usize);
    let page = query::skip_records(page, offset);

    tracing::debug!(
        "Search query={:?} orderField={:?} orderBy={} -> {} records",
        query_text,
        order_field,
        order_by,
        page.len()
    );

    Json(page).into_response()
}

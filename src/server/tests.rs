//! Search Server Tests
//!
//! Wire-level validation of the `/search` handler against a loopback server:
//! status codes, error payload shape, permissive numeric parsing, and the
//! guarantee that authentication runs before any dataset access.

#[cfg(test)]
mod tests {
    use crate::server::protocol::{
        parse_or_zero, ErrorResponse, ACCESS_TOKEN_HEADER, BAD_TOKEN_REASON, ERROR_BAD_ORDER_BY,
        ERROR_BAD_ORDER_FIELD,
    };
    use crate::server::{router, ServerConfig};
    use crate::store::loader::{InMemoryStore, RecordStore};
    use crate::store::types::UserRecord;
    use anyhow::Result;
    use reqwest::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const TEST_TOKEN: &str = "test access token";

    fn user(id: i64, first: &str, age: i32) -> UserRecord {
        UserRecord {
            id,
            is_active: true,
            age,
            first_name: first.to_string(),
            last_name: "Fixture".to_string(),
            about: "fixture record".to_string(),
            ..UserRecord::default()
        }
    }

    fn sample() -> Vec<UserRecord> {
        vec![
            user(3, "Boyd", 22),
            user(1, "Hilda", 40),
            user(2, "Brooks", 25),
            user(4, "Annie", 35),
        ]
    }

    /// Store that counts how often the handler consults it.
    struct CountingStore {
        records: Vec<UserRecord>,
        loads: Arc<AtomicUsize>,
    }

    impl RecordStore for CountingStore {
        fn load(&self) -> Result<Vec<UserRecord>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(self.records.clone())
        }
    }

    /// Store whose backing data is unreadable.
    struct FailingStore;

    impl RecordStore for FailingStore {
        fn load(&self) -> Result<Vec<UserRecord>> {
            Err(anyhow::anyhow!("secret internal detail: /etc/dataset gone"))
        }
    }

    async fn spawn(store: Arc<dyn RecordStore>) -> String {
        let app = router(store, Arc::new(ServerConfig::new(TEST_TOKEN)));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn get(url: &str, token: &str) -> reqwest::Response {
        reqwest::Client::new()
            .get(url)
            .header(ACCESS_TOKEN_HEADER, token)
            .send()
            .await
            .unwrap()
    }

    // ============================================================
    // PROTOCOL HELPERS
    // ============================================================

    #[test]
    fn test_parse_or_zero_accepts_decimal_text() {
        assert_eq!(parse_or_zero(Some("12")), 12);
        assert_eq!(parse_or_zero(Some("-3")), -3);
        assert_eq!(parse_or_zero(Some("0")), 0);
    }

    #[test]
    fn test_parse_or_zero_swallows_garbage() {
        assert_eq!(parse_or_zero(Some("abc")), 0);
        assert_eq!(parse_or_zero(Some("")), 0);
        assert_eq!(parse_or_zero(Some("1.5")), 0);
        assert_eq!(parse_or_zero(None), 0);
    }

    #[test]
    fn test_error_response_wire_shape() {
        let payload = ErrorResponse {
            error: ERROR_BAD_ORDER_BY.to_string(),
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, "{\"Error\":\"ErrorBadOrderBy\"}");
    }

    // ============================================================
    // AUTHENTICATION
    // ============================================================

    #[tokio::test]
    async fn test_wrong_token_is_unauthorized() {
        let base = spawn(Arc::new(InMemoryStore::new(sample()))).await;

        let resp = get(&format!("{}/search", base), "wrong token").await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let payload: ErrorResponse = resp.json().await.unwrap();
        assert_eq!(payload.error, BAD_TOKEN_REASON);
    }

    #[tokio::test]
    async fn test_wrong_token_never_touches_the_store() {
        let loads = Arc::new(AtomicUsize::new(0));
        let store = Arc::new(CountingStore {
            records: sample(),
            loads: loads.clone(),
        });
        let base = spawn(store).await;

        let resp = get(&format!("{}/search", base), "wrong token").await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(loads.load(Ordering::SeqCst), 0);

        // A valid token does load, exactly once per request.
        let resp = get(&format!("{}/search", base), TEST_TOKEN).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    // ============================================================
    // PARAMETER HANDLING
    // ============================================================

    #[tokio::test]
    async fn test_malformed_numerics_are_treated_as_zero() {
        let base = spawn(Arc::new(InMemoryStore::new(sample()))).await;

        let url = format!("{}/search?orderBy=banana&limit=x&offset=", base);
        let resp = get(&url, TEST_TOKEN).await;
        assert_eq!(resp.status(), StatusCode::OK);

        // orderBy=0, limit=0, offset=0: the whole set, input order.
        let users: Vec<UserRecord> = resp.json().await.unwrap();
        let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3, 1, 2, 4]);
    }

    #[tokio::test]
    async fn test_unknown_order_field_is_bad_request() {
        let base = spawn(Arc::new(InMemoryStore::new(sample()))).await;

        let resp = get(&format!("{}/search?orderField=Banana", base), TEST_TOKEN).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let payload: ErrorResponse = resp.json().await.unwrap();
        assert_eq!(payload.error, ERROR_BAD_ORDER_FIELD);
    }

    #[tokio::test]
    async fn test_out_of_range_order_by_is_bad_request() {
        let base = spawn(Arc::new(InMemoryStore::new(sample()))).await;

        let resp = get(&format!("{}/search?orderBy=5", base), TEST_TOKEN).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let payload: ErrorResponse = resp.json().await.unwrap();
        assert_eq!(payload.error, ERROR_BAD_ORDER_BY);
    }

    // ============================================================
    // PROCESSING
    // ============================================================

    #[tokio::test]
    async fn test_success_payload_uses_dataset_field_names() {
        let base = spawn(Arc::new(InMemoryStore::new(sample()))).await;

        let resp = get(&format!("{}/search?limit=1", base), TEST_TOKEN).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = resp.text().await.unwrap();
        assert!(body.starts_with('['));
        assert!(body.contains("\"isActive\""));
        assert!(body.contains("\"first_name\""));
    }

    #[tokio::test]
    async fn test_limit_is_applied_before_skip() {
        let base = spawn(Arc::new(InMemoryStore::new(sample()))).await;

        // limit=3 keeps ids [3, 1, 2]; offset=2 then skips one record.
        let resp = get(&format!("{}/search?limit=3&offset=2", base), TEST_TOKEN).await;
        let users: Vec<UserRecord> = resp.json().await.unwrap();
        let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_filter_sort_and_paginate_together() {
        let base = spawn(Arc::new(InMemoryStore::new(sample()))).await;

        let url = format!("{}/search?query=fixture&orderField=Age&orderBy=1&limit=2", base);
        let resp = get(&url, TEST_TOKEN).await;
        let users: Vec<UserRecord> = resp.json().await.unwrap();
        let ages: Vec<i32> = users.iter().map(|u| u.age).collect();
        assert_eq!(ages, vec![22, 25]);
    }

    // ============================================================
    // STORE FAILURE
    // ============================================================

    #[tokio::test]
    async fn test_unreadable_store_is_a_generic_server_error() {
        let base = spawn(Arc::new(FailingStore)).await;

        let resp = get(&format!("{}/search", base), TEST_TOKEN).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        // The internal diagnostic must not leak into the payload.
        let body = resp.text().await.unwrap();
        assert!(!body.contains("secret internal detail"));
        assert!(!body.contains("/etc/dataset"));
    }
}

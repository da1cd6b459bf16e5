use super::error::SearchError;
use super::types::{SearchRequest, SearchResult};
use crate::server::protocol::{
    ErrorResponse, ACCESS_TOKEN_HEADER, DEFAULT_PAGE_CAP, ERROR_BAD_ORDER_BY,
    ERROR_BAD_ORDER_FIELD, SEARCH_PATH,
};
use crate::store::types::UserRecord;
use reqwest::StatusCode;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Client for the search endpoint. One request in flight per `find_users`
/// call; no retries, no shared state between calls.
pub struct SearchClient {
    pub url: String,
    pub access_token: String,
    timeout: Duration,
    http: reqwest::Client,
}

impl SearchClient {
    pub fn new(url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self::with_timeout(url, access_token, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        url: impl Into<String>,
        access_token: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            url: url.into(),
            access_token: access_token.into(),
            timeout,
            http: reqwest::Client::new(),
        }
    }

    /// Runs one search round trip.
    ///
    /// The limit actually sent is the requested limit capped to
    /// [`DEFAULT_PAGE_CAP`], plus one probe record: if the server returns the
    /// full over-fetched page, there is a next page and the probe record is
    /// trimmed before returning.
    pub async fn find_users(&self, request: SearchRequest) -> Result<SearchResult, SearchError> {
        if request.limit < 0 {
            return Err(SearchError::InvalidLimit);
        }
        if request.offset < 0 {
            return Err(SearchError::InvalidOffset);
        }

        let effective_limit = if request.limit == 0 || request.limit > DEFAULT_PAGE_CAP {
            DEFAULT_PAGE_CAP
        } else {
            request.limit
        };

        let params = format!(
            "limit={}&offset={}&query={}&orderField={}&orderBy={}",
            effective_limit + 1,
            request.offset,
            urlencoding::encode(&request.query),
            urlencoding::encode(&request.order_field),
            request.order_by,
        );
        let url = format!("{}{}?{}", self.url, SEARCH_PATH, params);

        let response = match self
            .http
            .get(&url)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return Err(SearchError::Timeout(params)),
            Err(e) => return Err(SearchError::Transport(e)),
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) if e.is_timeout() => return Err(SearchError::Timeout(params)),
            Err(e) => return Err(SearchError::Transport(e)),
        };

        if status == StatusCode::UNAUTHORIZED {
            let payload: ErrorResponse =
                serde_json::from_str(&body).map_err(SearchError::Decode)?;
            return Err(SearchError::Auth(payload.error));
        }

        if status == StatusCode::BAD_REQUEST {
            let payload: ErrorResponse =
                serde_json::from_str(&body).map_err(SearchError::Decode)?;
            return match payload.error.as_str() {
                ERROR_BAD_ORDER_FIELD => Err(SearchError::BadOrderField(request.order_field)),
                ERROR_BAD_ORDER_BY => Err(SearchError::BadOrderBy),
                other => Err(SearchError::UnknownBadRequest(other.to_string())),
            };
        }

        let mut users: Vec<UserRecord> =
            serde_json::from_str(&body).map_err(SearchError::Decode)?;
        let next_page = users.len() as i32 == effective_limit + 1;
        if next_page {
            users.truncate(effective_limit as usize);
        }
        Ok(SearchResult { users, next_page })
    }
}

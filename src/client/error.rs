use thiserror::Error;

/// Everything `find_users` can report. Message text is part of the contract:
/// callers match on it, so the wording here is fixed.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Rejected locally; no request was sent.
    #[error("limit must be > 0")]
    InvalidLimit,

    /// Rejected locally; no request was sent.
    #[error("offset must be > 0")]
    InvalidOffset,

    /// The server refused the access token. The message is the server's
    /// rejection reason, echoed verbatim.
    #[error("{0}")]
    Auth(String),

    /// The server did not recognize the requested order field.
    #[error("OrderField {0} invalid")]
    BadOrderField(String),

    /// The server rejected the sort direction.
    #[error("Bad orderBy value")]
    BadOrderBy,

    /// A bad-request response with a reason this client does not know.
    #[error("unknown bad request error: {0}")]
    UnknownBadRequest(String),

    /// The round trip exceeded the client's configured timeout. Carries the
    /// encoded request parameters for diagnosability.
    #[error("timeout for {0}")]
    Timeout(String),

    /// Connectivity-level failure without a structured server response.
    #[error("unknown error {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body did not match the expected payload schema.
    #[error("cant unpack result json: {0}")]
    Decode(#[source] serde_json::Error),
}

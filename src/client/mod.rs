//! Search Client Module
//!
//! The public entry point of the system. `SearchClient::find_users` validates
//! a request locally, encodes it into the wire parameters, sends it with a
//! hard timeout, and classifies every failure mode of the round trip into a
//! [`error::SearchError`] variant.
//!
//! Pagination uses a peek-ahead probe: the client always asks the server for
//! one record more than the page it will return, and deduces `next_page` from
//! whether that extra record came back.
//!
//! ## Submodules
//! - **`search`**: The client and its request/response round trip.
//! - **`error`**: The failure taxonomy surfaced to callers.
//! - **`types`**: `SearchRequest` and `SearchResult`.

pub mod error;
pub mod search;
pub mod types;

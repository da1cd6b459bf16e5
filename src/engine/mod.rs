//! Query Engine Module
//!
//! The core component responsible for deriving a result set from a parsed
//! search request. Everything here is a pure function over an owned record
//! vector; no I/O, no shared state.
//!
//! ## Overview
//! The engine implements the server's processing pipeline:
//! filter (substring match over name and about) → sort (by id, age or first
//! name, ascending/descending/as-is) → limit → skip. Filtering and sorting
//! are fused behind [`query::apply`], which validates the order field and
//! direction up front and reports bad values as [`types::QueryError`]
//! variants rather than aborting — the server turns those into structured
//! bad-request responses.
//!
//! ## Submodules
//! - **`query`**: Filtering, sorting and pagination functions.
//! - **`types`**: Order field / sort direction parsing and the error type.

pub mod query;
pub mod types;

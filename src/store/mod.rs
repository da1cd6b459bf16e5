//! Record Store Module
//!
//! Supplies the full user dataset to the search server. The server never
//! touches files directly; it goes through the `RecordStore` trait so tests
//! can run against distinct in-memory fixtures in parallel.
//!
//! ## Submodules
//! - **`loader`**: The `RecordStore` trait and its implementations
//!   (`JsonFileStore`, `InMemoryStore`).
//! - **`types`**: The `UserRecord` value and its wire field names.

pub mod loader;
pub mod types;

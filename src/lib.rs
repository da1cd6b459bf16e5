//! User Search Service Library
//!
//! This library crate defines the components of a small "find users" search
//! facility: an HTTP server that filters, sorts and paginates a fixed user
//! dataset, and a typed client that talks to it. It is the foundation for the
//! binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of four loosely coupled subsystems:
//!
//! - **`store`**: The dataset layer. Supplies the full ordered sequence of
//!   user records through the `RecordStore` trait (JSON file on disk, or an
//!   in-memory fixture).
//! - **`engine`**: The core query logic. Pure functions that filter by
//!   substring, sort by a chosen field and direction, and paginate. No I/O.
//! - **`server`**: The HTTP layer. Parses transport parameters into a query,
//!   checks the access token, invokes the engine, and serializes the result
//!   (or a structured error) back to the caller.
//! - **`client`**: The public entry point. Validates a request, encodes it,
//!   sends it, and classifies every way the round trip can fail.

pub mod client;
pub mod engine;
pub mod server;
pub mod store;

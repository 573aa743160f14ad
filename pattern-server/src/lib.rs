//! Local editor backend for diagram pattern files.
//!
//! Serves a static editor from a data directory and exposes read/write
//! endpoints for the JSON documents it edits.

pub mod routes;
pub mod store;

pub use routes::{router, ApiError};
pub use store::{PatternStore, StoreError};

pub const DEFAULT_PORT: u16 = 3456;

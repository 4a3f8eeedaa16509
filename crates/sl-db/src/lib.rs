//! sl-db - Warehouse access layer for Starload
//!
//! The quality auditor only needs scalar COUNT queries against the
//! loaded warehouse plus enough DDL support to stand one up in tests.
//! The [`Warehouse`] trait captures exactly that surface; DuckDB is the
//! bundled implementation.

pub mod duckdb;
pub mod error;
pub mod traits;

pub use crate::duckdb::DuckDbWarehouse;
pub use error::{DbError, DbResult};
pub use traits::Warehouse;

//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the lifecycle logic and an
//! external system (the DBFS REST API, the local filesystem).
//! Implementations live in `src/adapters/`.

pub mod dbfs;
pub mod files;

pub use dbfs::{DbfsApi, DbfsApiError};
pub use files::{FileMeta, LocalFiles};

//! Shared types for the employee record service
//!
//! Wire types used by both the server and the client crates.

pub mod models;

// Re-exports
pub use models::{
    DeleteResult, EmployeeRecord, InsertResult, Level, RecordFields, UnknownLevel, UpdateResult,
};
pub use serde::{Deserialize, Serialize};

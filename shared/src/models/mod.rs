//! Data models
//!
//! Shared between record-server and record-client (via API).

pub mod record;

// Re-exports
pub use record::*;

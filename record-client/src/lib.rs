//! Record Client - HTTP client for the record server
//!
//! [`HttpClient`] wraps the `/record` API; [`RecordForm`] drives it the way
//! the create/edit form does.

pub mod config;
pub mod error;
pub mod form;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use form::{FormUpdate, RecordForm, Submitted};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::{DeleteResult, EmployeeRecord, Level, RecordFields, UpdateResult};

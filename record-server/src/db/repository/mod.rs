//! Repository Module
//!
//! The record store accessor: the only code that talks to the `records` table.

pub mod record;

pub use record::RecordRepository;

use async_trait::async_trait;
use shared::{EmployeeRecord, RecordFields};
use thiserror::Error;
use uuid::Uuid;

/// Table holding one document per employee record
pub const RECORDS_TABLE: &str = "records";

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Record identifier in the store's native format
///
/// Records are keyed by a random UUID. Any textual UUID form is accepted on
/// input and normalized to the hyphenated lowercase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordKey(Uuid);

impl RecordKey {
    /// Mint a fresh key, never handed out before
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a client-supplied id
    pub fn parse(id: &str) -> RepoResult<Self> {
        Uuid::try_parse(id)
            .map(Self)
            .map_err(|_| RepoError::InvalidIdentifier(id.to_string()))
    }

    pub fn as_string(&self) -> String {
        self.0.hyphenated().to_string()
    }
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Record store accessor
///
/// Zero matches on update/delete are reported through the returned count,
/// never as an error. Only `get_by_id` distinguishes "not found" (`None`).
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Every record, in store order
    async fn list_all(&self) -> RepoResult<Vec<EmployeeRecord>>;

    async fn get_by_id(&self, id: &str) -> RepoResult<Option<EmployeeRecord>>;

    /// Insert and return the new id
    async fn insert(&self, fields: RecordFields) -> RepoResult<String>;

    /// Replace all fields; returns (matched, modified)
    async fn update_by_id(&self, id: &str, fields: RecordFields) -> RepoResult<(u64, u64)>;

    /// Returns the number of deleted records (0 or 1)
    async fn delete_by_id(&self, id: &str) -> RepoResult<u64>;

    /// Cheap reachability check
    async fn ping(&self) -> RepoResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_accepts_any_uuid_form() {
        let key = RecordKey::generate();
        let hyphenated = key.as_string();
        let simple = hyphenated.replace('-', "");

        assert_eq!(RecordKey::parse(&hyphenated).unwrap(), key);
        assert_eq!(RecordKey::parse(&simple).unwrap(), key);
        assert_eq!(RecordKey::parse(&hyphenated.to_uppercase()).unwrap(), key);
    }

    #[test]
    fn key_rejects_malformed_ids() {
        for bad in ["", "abc", "records:abc", "65f0c0ffee0ddba11ca7f00d", "not a uuid at all"] {
            match RecordKey::parse(bad) {
                Err(RepoError::InvalidIdentifier(id)) => assert_eq!(id, bad),
                other => panic!("expected InvalidIdentifier for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn key_rejects_surrounding_whitespace() {
        let hyphenated = RecordKey::generate().as_string();
        for padded in [format!(" {hyphenated}"), format!("{hyphenated} "), format!("\t{hyphenated}\n")] {
            assert!(matches!(
                RecordKey::parse(&padded),
                Err(RepoError::InvalidIdentifier(ref id)) if *id == padded
            ));
        }
    }

    #[test]
    fn generated_keys_are_distinct() {
        assert_ne!(RecordKey::generate(), RecordKey::generate());
    }
}

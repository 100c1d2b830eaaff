//! Employee Record Repository

use async_trait::async_trait;
use serde::Deserialize;
use shared::{EmployeeRecord, RecordFields};
use surrealdb::engine::any::Any;
use surrealdb::{RecordId, Surreal};

use super::{RECORDS_TABLE, RecordKey, RecordStore, RepoResult};

const SELECT_ALL: &str =
    "SELECT record::id(id) AS record_key, name, position, level FROM records";
const SELECT_ONE: &str =
    "SELECT record::id(id) AS record_key, name, position, level FROM $thing";
const CREATE: &str =
    "CREATE $thing SET name = $name, position = $position, level = $level RETURN NONE";
// UPDATE on a missing id matches nothing; only UPSERT would create it
const UPDATE: &str = r#"UPDATE $thing SET
        name = $name,
        position = $position,
        level = $level
    RETURN BEFORE"#;
const DELETE: &str = "DELETE $thing RETURN BEFORE";

/// Row shape of the SELECT projections
#[derive(Debug, Deserialize)]
struct RecordRow {
    record_key: String,
    name: String,
    position: String,
    level: String,
}

impl From<RecordRow> for EmployeeRecord {
    fn from(row: RecordRow) -> Self {
        EmployeeRecord {
            id: row.record_key,
            name: row.name,
            position: row.position,
            level: row.level,
        }
    }
}

/// Field triple of a document as it was before a write
#[derive(Debug, Deserialize)]
struct FieldsRow {
    name: String,
    position: String,
    level: String,
}

impl FieldsRow {
    fn differs_from(&self, fields: &RecordFields) -> bool {
        self.name != fields.name || self.position != fields.position || self.level != fields.level
    }
}

/// SurrealDB-backed record store
#[derive(Clone, Debug)]
pub struct RecordRepository {
    db: Surreal<Any>,
}

impl RecordRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    fn thing(key: &RecordKey) -> RecordId {
        RecordId::from_table_key(RECORDS_TABLE, key.as_string())
    }
}

#[async_trait]
impl RecordStore for RecordRepository {
    async fn list_all(&self) -> RepoResult<Vec<EmployeeRecord>> {
        let rows: Vec<RecordRow> = self.db.query(SELECT_ALL).await?.take(0)?;
        Ok(rows.into_iter().map(EmployeeRecord::from).collect())
    }

    async fn get_by_id(&self, id: &str) -> RepoResult<Option<EmployeeRecord>> {
        let key = RecordKey::parse(id)?;
        let rows: Vec<RecordRow> = self
            .db
            .query(SELECT_ONE)
            .bind(("thing", Self::thing(&key)))
            .await?
            .take(0)?;
        Ok(rows.into_iter().next().map(EmployeeRecord::from))
    }

    async fn insert(&self, fields: RecordFields) -> RepoResult<String> {
        let key = RecordKey::generate();
        self.db
            .query(CREATE)
            .bind(("thing", Self::thing(&key)))
            .bind(("name", fields.name))
            .bind(("position", fields.position))
            .bind(("level", fields.level))
            .await?
            .check()?;

        tracing::debug!(id = %key, "Record inserted");
        Ok(key.as_string())
    }

    async fn update_by_id(&self, id: &str, fields: RecordFields) -> RepoResult<(u64, u64)> {
        let key = RecordKey::parse(id)?;
        let before: Vec<FieldsRow> = self
            .db
            .query(UPDATE)
            .bind(("thing", Self::thing(&key)))
            .bind(("name", fields.name.clone()))
            .bind(("position", fields.position.clone()))
            .bind(("level", fields.level.clone()))
            .await?
            .take(0)?;

        let matched = before.len() as u64;
        let modified = before.iter().filter(|row| row.differs_from(&fields)).count() as u64;
        tracing::debug!(id = %key, matched, modified, "Record update applied");
        Ok((matched, modified))
    }

    async fn delete_by_id(&self, id: &str) -> RepoResult<u64> {
        let key = RecordKey::parse(id)?;
        let before: Vec<FieldsRow> = self
            .db
            .query(DELETE)
            .bind(("thing", Self::thing(&key)))
            .await?
            .take(0)?;

        let deleted = before.len() as u64;
        tracing::debug!(id = %key, deleted, "Record delete applied");
        Ok(deleted)
    }

    async fn ping(&self) -> RepoResult<()> {
        self.db.health().await?;
        Ok(())
    }
}

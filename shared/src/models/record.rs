//! Employee Record Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Employee record as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Store-assigned identifier, immutable after insert
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub position: String,
    /// Free text on the wire; see [`Level`] for the values the form offers
    pub level: String,
}

impl EmployeeRecord {
    /// Build a record from an id and its field triple
    pub fn new(id: impl Into<String>, fields: RecordFields) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            position: fields.position,
            level: fields.level,
        }
    }

    /// The mutable part of the record
    pub fn fields(&self) -> RecordFields {
        RecordFields {
            name: self.name.clone(),
            position: self.position.clone(),
            level: self.level.clone(),
        }
    }
}

/// Create / update payload
///
/// All three fields must be present. Empty strings are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFields {
    pub name: String,
    pub position: String,
    pub level: String,
}

impl RecordFields {
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        level: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            level: level.into(),
        }
    }
}

/// Seniority level offered by the record form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Intern,
    Junior,
    Senior,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Intern, Level::Junior, Level::Senior];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Intern => "Intern",
            Level::Junior => "Junior",
            Level::Senior => "Senior",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the known levels
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown level '{0}', expected one of Intern, Junior, Senior")]
pub struct UnknownLevel(pub String);

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| UnknownLevel(s.to_string()))
    }
}

/// Acknowledgement for an insert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub acknowledged: bool,
    pub inserted_id: String,
}

/// Outcome of an update; a zero `matched_count` means no record had the id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Outcome of a delete; a zero `deleted_count` means no record had the id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_id_as_underscore_id() {
        let record = EmployeeRecord::new(
            "abc",
            RecordFields::new("Ada Lovelace", "Engineer", "Senior"),
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "_id": "abc",
                "name": "Ada Lovelace",
                "position": "Engineer",
                "level": "Senior"
            })
        );
    }

    #[test]
    fn fields_require_all_three_keys() {
        let missing = serde_json::from_str::<RecordFields>(r#"{"name":"a","position":"b"}"#);
        assert!(missing.is_err());

        let empty: RecordFields =
            serde_json::from_str(r#"{"name":"","position":"","level":""}"#).unwrap();
        assert_eq!(empty, RecordFields::default());
    }

    #[test]
    fn level_parses_known_values_only() {
        assert_eq!("Junior".parse::<Level>().unwrap(), Level::Junior);
        assert!("junior".parse::<Level>().is_err());
        assert!("Principal".parse::<Level>().is_err());
    }

    #[test]
    fn results_use_camel_case_counts() {
        let json = serde_json::to_value(UpdateResult {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
        })
        .unwrap();
        assert_eq!(json["matchedCount"], 0);
        assert_eq!(json["modifiedCount"], 0);

        let json = serde_json::to_value(DeleteResult {
            acknowledged: true,
            deleted_count: 1,
        })
        .unwrap();
        assert_eq!(json["deletedCount"], 1);
    }
}

//! Record form controller
//!
//! Holds the state of the create/edit form and talks to the API the way the
//! browser form does: GET on load when editing, POST when new, PATCH when
//! editing. Failures are logged and never retried; after a submit the form
//! is cleared whatever the outcome, and the caller navigates away.

use shared::{Level, RecordFields, UpdateResult};

use crate::{ClientResult, HttpClient};

/// Partial form update, merged over the current state
#[derive(Debug, Clone, Default)]
pub struct FormUpdate {
    pub name: Option<String>,
    pub position: Option<String>,
    pub level: Option<Level>,
}

/// What a successful submit did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitted {
    Created { id: String },
    Updated { id: String, result: UpdateResult },
}

/// Create/edit form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordForm {
    name: String,
    position: String,
    /// Level text as loaded or selected; empty when nothing is selected
    level: String,
    /// Id of the record being edited; `None` for a new record
    editing: Option<String>,
}

impl RecordForm {
    /// Empty form for a new record
    pub fn new() -> Self {
        Self::default()
    }

    /// Form for editing `id`, filled from the server
    ///
    /// A failed fetch is logged and leaves the fields empty.
    pub async fn load(client: &HttpClient, id: &str) -> Self {
        let mut form = Self {
            editing: Some(id.to_string()),
            ..Self::default()
        };

        match client.get_record(id).await {
            Ok(record) => {
                form.name = record.name;
                form.position = record.position;
                // Kept as stored so an unchanged submit does not rewrite it
                if !record.level.is_empty() {
                    if let Err(e) = record.level.parse::<Level>() {
                        tracing::warn!(id = %id, "Record level not selectable: {}", e);
                    }
                }
                form.level = record.level;
            }
            Err(e) => {
                tracing::error!(id = %id, "An error has occurred: {}", e);
            }
        }

        form
    }

    pub fn is_new(&self) -> bool {
        self.editing.is_none()
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    /// Selected level, `None` when empty or not one of the selectable values
    pub fn level(&self) -> Option<Level> {
        self.level.parse().ok()
    }

    /// Level exactly as it will be submitted
    pub fn level_text(&self) -> &str {
        &self.level
    }

    /// Merge `update` over the current values
    pub fn update_field(&mut self, update: FormUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(position) = update.position {
            self.position = position;
        }
        if let Some(level) = update.level {
            self.level = level.to_string();
        }
    }

    /// Request payload; an unselected level is sent as an empty string
    pub fn fields(&self) -> RecordFields {
        RecordFields::new(self.name.clone(), self.position.clone(), self.level.clone())
    }

    /// POST when new, PATCH when editing
    ///
    /// The fields are cleared afterwards even when the request failed.
    pub async fn submit(&mut self, client: &HttpClient) -> ClientResult<Submitted> {
        let fields = self.fields();

        let outcome = match &self.editing {
            None => client
                .create_record(&fields)
                .await
                .map(|id| Submitted::Created { id }),
            Some(id) => client
                .update_record(id, &fields)
                .await
                .map(|result| Submitted::Updated {
                    id: id.clone(),
                    result,
                }),
        };

        if let Err(e) = &outcome {
            tracing::error!("A problem occurred adding or updating a record: {}", e);
        }

        self.name.clear();
        self.position.clear();
        self.level.clear();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_is_empty_and_new() {
        let form = RecordForm::new();
        assert!(form.is_new());
        assert_eq!(form.fields(), RecordFields::default());
    }

    #[test]
    fn updates_merge_over_previous_state() {
        let mut form = RecordForm::new();
        form.update_field(FormUpdate {
            name: Some("Ada Lovelace".into()),
            ..FormUpdate::default()
        });
        form.update_field(FormUpdate {
            position: Some("Engineer".into()),
            level: Some(Level::Senior),
            ..FormUpdate::default()
        });

        assert_eq!(form.name(), "Ada Lovelace");
        assert_eq!(form.level(), Some(Level::Senior));
        assert_eq!(
            form.fields(),
            RecordFields::new("Ada Lovelace", "Engineer", "Senior")
        );
    }

    #[test]
    fn selecting_a_level_replaces_free_text() {
        let mut form = RecordForm {
            level: "Principal".into(),
            editing: Some("id".into()),
            ..RecordForm::default()
        };
        assert_eq!(form.level(), None);
        assert_eq!(form.fields().level, "Principal");

        form.update_field(FormUpdate {
            level: Some(Level::Junior),
            ..FormUpdate::default()
        });
        assert_eq!(form.level_text(), "Junior");
    }
}

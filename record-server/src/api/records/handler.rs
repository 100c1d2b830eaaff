//! Employee Record API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use shared::{DeleteResult, EmployeeRecord, InsertResult, RecordFields, UpdateResult};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// List all records
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<EmployeeRecord>>> {
    let records = state
        .records
        .list_all()
        .await
        .map_err(|e| AppError::from_repo(e, "Error fetching records"))?;
    Ok(Json(records))
}

/// Get a record by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<EmployeeRecord>> {
    let record = state
        .records
        .get_by_id(&id)
        .await
        .map_err(|e| AppError::from_repo(e, "Error fetching record"))?
        .ok_or_else(AppError::not_found)?;
    Ok(Json(record))
}

/// Create a record
///
/// Answers 201 with the new id in the body and in `Location`.
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<RecordFields>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(fields) = payload?;
    let id = state
        .records
        .insert(fields)
        .await
        .map_err(|e| AppError::from_repo(e, "Error adding record"))?;

    tracing::info!(id = %id, "Record created");
    let location = format!("/record/{id}");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(InsertResult {
            acknowledged: true,
            inserted_id: id,
        }),
    ))
}

/// Replace the fields of a record
///
/// An unknown id is not an error: the result reports `matchedCount: 0`.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<RecordFields>, JsonRejection>,
) -> AppResult<Json<UpdateResult>> {
    let Json(fields) = payload?;
    let (matched_count, modified_count) = state
        .records
        .update_by_id(&id, fields)
        .await
        .map_err(|e| AppError::from_repo(e, "Error updating record"))?;

    if matched_count == 0 {
        tracing::debug!(id = %id, "Update matched no record");
    }
    Ok(Json(UpdateResult {
        acknowledged: true,
        matched_count,
        modified_count,
    }))
}

/// Delete a record
///
/// An unknown id is not an error: the result reports `deletedCount: 0`.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteResult>> {
    let deleted_count = state
        .records
        .delete_by_id(&id)
        .await
        .map_err(|e| AppError::from_repo(e, "Error deleting record"))?;

    if deleted_count > 0 {
        tracing::info!(id = %id, "Record deleted");
    }
    Ok(Json(DeleteResult {
        acknowledged: true,
        deleted_count,
    }))
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use bugtracker_core::{validate_bug_patch, validate_bug_payload, Bug, BugPatch, BugStatus, NewBug};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result, NOT_FOUND_MESSAGE};
use crate::extract::JsonBody;
use crate::state::ApiState;

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// Create a bug
pub async fn create_bug(
    State(state): State<ApiState>,
    body: JsonBody,
) -> Result<(StatusCode, Json<Bug>)> {
    let title = body.str_field("title");
    let description = body.str_field("description");

    let validation = validate_bug_payload(title, description);
    if !validation.valid {
        tracing::debug!("Rejected bug payload: {:?}", validation.errors);
        return Err(ApiError::Validation(validation.errors));
    }

    let new_bug = NewBug::new(title.unwrap_or_default())
        .with_description(description.unwrap_or_default());
    let bug = state.store.create(new_bug).await;

    Ok((StatusCode::CREATED, Json(bug)))
}

/// List all bugs, newest first
pub async fn list_bugs(State(state): State<ApiState>) -> Json<Vec<Bug>> {
    Json(state.store.find_all().await)
}

/// Update a bug's title, description or status
pub async fn update_bug(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    body: JsonBody,
) -> Result<Json<Bug>> {
    let title = body.str_field("title");
    let description = body.str_field("description");
    let status = body.str_field("status");

    let validation = validate_bug_patch(title, description, status);
    if !validation.valid {
        tracing::debug!("Rejected update for bug {}: {:?}", id, validation.errors);
        return Err(ApiError::Validation(validation.errors));
    }

    let patch = BugPatch {
        title: title.map(str::to_string),
        description: description.map(str::to_string),
        status: status
            .map(str::parse::<BugStatus>)
            .transpose()
            .map_err(anyhow::Error::from)?,
    };
    if patch.is_empty() {
        tracing::debug!("Update for bug {} carries no recognized fields", id);
    }

    state
        .store
        .update_by_id(&id, patch)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(NOT_FOUND_MESSAGE.to_string()))
}

/// Delete a bug
pub async fn delete_bug(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    if state.store.delete_by_id(&id).await {
        Ok(Json(DeleteResponse { success: true }))
    } else {
        Err(ApiError::NotFound(NOT_FOUND_MESSAGE.to_string()))
    }
}

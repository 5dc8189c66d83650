use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use todo_merge::{merge_non_null, MergeReport};
use todo_types::{NewTask, Task, TaskId, TaskPatch};

use crate::error::{ServerError, ServerResult};
use crate::extract::Payload;
use crate::state::AppState;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler() -> Json<serde_json::Value> {
    Json(json!({
        "name": "todo-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn parse_task_id(raw: &str) -> ServerResult<TaskId> {
    Ok(raw.parse::<TaskId>()?)
}

pub async fn create_task(
    State(state): State<AppState>,
    Payload(new_task): Payload<NewTask>,
) -> ServerResult<(StatusCode, Json<Task>)> {
    let task = state.store().insert(new_task.into_task())?;
    tracing::info!(task = %task.id, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn list_tasks(State(state): State<AppState>) -> ServerResult<Json<Vec<Task>>> {
    Ok(Json(state.store().list()?))
}

pub async fn get_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ServerResult<Json<Task>> {
    let id = parse_task_id(&raw_id)?;
    let task = state.store().get(&id)?.ok_or(ServerError::TaskNotFound(id))?;
    Ok(Json(task))
}

/// Partial update: copies the non-null fields of the patch onto the stored
/// task. Serves both `PATCH` and `PUT`.
pub async fn update_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Payload(patch): Payload<TaskPatch>,
) -> ServerResult<Json<Task>> {
    let id = parse_task_id(&raw_id)?;
    let mut report = MergeReport::default();
    let task = state.store().update(&id, &mut |task: &mut Task| {
        report = merge_non_null(&patch, task);
        if !report.is_noop() {
            task.touch();
        }
    })?;
    tracing::debug!(task = %id, %report, "task updated");
    Ok(Json(task))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ServerResult<StatusCode> {
    let id = parse_task_id(&raw_id)?;
    if state.store().delete(&id)? {
        tracing::info!(task = %id, "task deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ServerError::TaskNotFound(id))
    }
}

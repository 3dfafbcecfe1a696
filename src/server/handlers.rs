//! Route handlers
//!
//! Each handler performs one service call; request bodies that fail to parse
//! surface as validation errors so clients always get the `{error, code}`
//! shape.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::domain::{allowed_targets, is_terminal};
use crate::errors::{CaseflowError, Result};
use crate::schemas::{Status, Timestamp, WorkItem};
use crate::store::{DetailsPatch, ItemStore, NewItem, TransitionRequest};
use crate::views::{
    self, Action, ColumnFilter, QuickFilter, Sort, SortDir, SortKey, Summary, TimeRange, View,
};

use super::AppState;

pub const SERVICE_NAME: &str = "workflow-api";

fn body<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|e| CaseflowError::Validation(format!("invalid request body: {}", e.body_text())))
}

fn query<T>(params: std::result::Result<Query<T>, QueryRejection>) -> Result<T> {
    params
        .map(|Query(value)| value)
        .map_err(|e| CaseflowError::Validation(format!("invalid query: {}", e.body_text())))
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "ok": true,
        "service": SERVICE_NAME,
        "time": Utc::now().timestamp_millis(),
    }))
}

pub async fn statuses() -> Json<Value> {
    let statuses: Vec<Value> = Status::ALL
        .iter()
        .map(|status| {
            json!({
                "status": status,
                "label": status.label(),
                "description": status.description(),
                "referral": status.is_referral(),
                "terminal": is_terminal(*status),
                "next": allowed_targets(*status),
            })
        })
        .collect();
    Json(Value::Array(statuses))
}

/// Query string for `GET /api/items`. Unknown parameters are rejected so a
/// misspelled filter never returns the unfiltered list.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ListQuery {
    pub view: Option<View>,
    pub actor: Option<String>,
    pub quick: Option<QuickFilter>,
    pub sort: Option<SortKey>,
    pub dir: Option<SortDir>,
    pub id: Option<String>,
    pub title: Option<String>,
    pub assignee: Option<String>,
    pub status: Option<String>,
    pub comments: Option<String>,
    pub received_from: Option<Timestamp>,
    pub received_to: Option<Timestamp>,
    pub logged_from: Option<Timestamp>,
    pub logged_to: Option<Timestamp>,
    pub start_from: Option<Timestamp>,
    pub start_to: Option<Timestamp>,
    pub end_from: Option<Timestamp>,
    pub end_to: Option<Timestamp>,
    pub time_min_secs: Option<u64>,
    pub time_max_secs: Option<u64>,
}

impl ListQuery {
    fn column_filter(&self) -> ColumnFilter {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        ColumnFilter {
            id: text(&self.id),
            title: text(&self.title),
            assignee: text(&self.assignee),
            status: text(&self.status),
            comments: text(&self.comments),
            received: TimeRange {
                from: self.received_from,
                to: self.received_to,
            },
            logged: TimeRange {
                from: self.logged_from,
                to: self.logged_to,
            },
            start: TimeRange {
                from: self.start_from,
                to: self.start_to,
            },
            end: TimeRange {
                from: self.end_from,
                to: self.end_to,
            },
            time_min_secs: self.time_min_secs,
            time_max_secs: self.time_max_secs,
        }
    }

    fn sort(&self) -> Option<Sort> {
        self.sort.map(|key| Sort {
            key,
            dir: self.dir.unwrap_or(SortDir::Asc),
        })
    }
}

pub async fn list_items<S: ItemStore + 'static>(
    State(state): State<AppState<S>>,
    params: std::result::Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<WorkItem>>> {
    let params = query(params)?;
    let items = state.service.list().await?;
    let now = state.service.now();
    let filter = params.column_filter();
    let sort = params.sort();

    let rows = match params.view.unwrap_or_default() {
        View::Manager => {
            views::manager_rows(&items, &filter, params.quick.unwrap_or_default(), sort, now)
        }
        View::Handler => {
            let actor = params.actor.as_deref().ok_or_else(|| {
                CaseflowError::Validation("actor is required for the handler view".to_string())
            })?;
            views::handler_rows(&items, actor, &filter, sort, now)
        }
        View::Referral => views::referral_rows(&items, &filter, sort, now),
    };
    Ok(Json(rows))
}

pub async fn create_item<S: ItemStore + 'static>(
    State(state): State<AppState<S>>,
    payload: std::result::Result<Json<NewItem>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let item = state.service.create(body(payload)?).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn get_item<S: ItemStore + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Json<WorkItem>> {
    Ok(Json(state.service.get(&id).await?))
}

pub async fn update_item<S: ItemStore + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<DetailsPatch>, JsonRejection>,
) -> Result<Json<WorkItem>> {
    Ok(Json(state.service.update_details(&id, body(payload)?).await?))
}

pub async fn delete_item<S: ItemStore + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct AllocateBody {
    pub handler: String,
}

pub async fn allocate<S: ItemStore + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<AllocateBody>, JsonRejection>,
) -> Result<Json<WorkItem>> {
    let AllocateBody { handler } = body(payload)?;
    Ok(Json(state.service.allocate(&id, &handler).await?))
}

#[derive(Debug, Deserialize)]
pub struct ActorBody {
    pub actor: String,
}

pub async fn pick_up<S: ItemStore + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<ActorBody>, JsonRejection>,
) -> Result<Json<WorkItem>> {
    let ActorBody { actor } = body(payload)?;
    Ok(Json(state.service.pick_up(&id, &actor).await?))
}

pub async fn transition<S: ItemStore + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<TransitionRequest>, JsonRejection>,
) -> Result<Json<WorkItem>> {
    Ok(Json(state.service.transition(&id, body(payload)?).await?))
}

#[derive(Debug, Deserialize)]
pub struct CommentBody {
    pub author: String,
    pub text: String,
}

pub async fn add_comment<S: ItemStore + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<CommentBody>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let CommentBody { author, text } = body(payload)?;
    let item = state.service.add_comment(&id, &author, &text).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[derive(Debug, Deserialize)]
pub struct ActorQuery {
    pub actor: String,
}

pub async fn actions<S: ItemStore + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    params: std::result::Result<Query<ActorQuery>, QueryRejection>,
) -> Result<Json<Vec<Action>>> {
    let ActorQuery { actor } = query(params)?;
    let items = state.service.list().await?;
    let item = items
        .iter()
        .find(|item| item.id == id)
        .ok_or_else(|| CaseflowError::NotFound(id.clone()))?;
    Ok(Json(views::available_actions(item, &actor, &items)))
}

pub async fn summary<S: ItemStore + 'static>(
    State(state): State<AppState<S>>,
) -> Result<Json<Summary>> {
    let items = state.service.list().await?;
    Ok(Json(views::summary(&items)))
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Not found", "code": "NOT_FOUND" })),
    )
}

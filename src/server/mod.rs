//! HTTP surface over the item service
//!
//! A thin axum router: handlers parse the request, call one service
//! operation and map `CaseflowError` onto a status code with an
//! `{error, code}` body.

mod error;
mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use crate::errors::Result;
use crate::schemas::Config;
use crate::store::{ItemService, ItemStore};

pub use handlers::SERVICE_NAME;

pub struct AppState<S: ItemStore> {
    pub service: Arc<ItemService<S>>,
}

impl<S: ItemStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        AppState {
            service: Arc::clone(&self.service),
        }
    }
}

pub fn build_router<S: ItemStore + 'static>(service: Arc<ItemService<S>>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/health", get(handlers::health))
        .route("/api/statuses", get(handlers::statuses))
        .route("/api/summary", get(handlers::summary::<S>))
        .route(
            "/api/items",
            get(handlers::list_items::<S>).post(handlers::create_item::<S>),
        )
        .route(
            "/api/items/:id",
            get(handlers::get_item::<S>)
                .put(handlers::update_item::<S>)
                .delete(handlers::delete_item::<S>),
        )
        .route("/api/items/:id/actions", get(handlers::actions::<S>))
        .route("/api/items/:id/allocate", post(handlers::allocate::<S>))
        .route("/api/items/:id/pick-up", post(handlers::pick_up::<S>))
        .route("/api/items/:id/transition", post(handlers::transition::<S>))
        .route("/api/items/:id/comments", post(handlers::add_comment::<S>))
        .fallback(handlers::not_found)
        .with_state(AppState { service })
}

/// Bind `config.bind_address:config.port` and serve until ctrl-c.
pub async fn serve<S: ItemStore + 'static>(config: &Config, service: Arc<ItemService<S>>) -> Result<()> {
    let addr = format!("{}:{}", config.bind_address, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("{} listening on http://{}", SERVICE_NAME, listener.local_addr()?);

    axum::serve(listener, build_router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{Status, WorkItem};
    use crate::store::{ManualClock, MemoryStore};
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn seeded() -> (Router, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(1_000));
        let items = vec![
            WorkItem::new("W-1", "first", 0),
            WorkItem::new("W-2", "second", 0)
                .with_assignee(Some("mahi".to_string()))
                .with_status(Status::ChReview),
        ];
        let service = Arc::new(ItemService::new(MemoryStore::new(items), clock.clone()));
        (build_router(service), clock)
    }

    async fn call(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                request = request.header("content-type", "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        let response = router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let (router, _) = seeded();
        for uri in ["/health", "/api/health"] {
            let (status, body) = call(&router, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["ok"], true);
            assert_eq!(body["service"], "workflow-api");
        }
    }

    #[tokio::test]
    async fn test_statuses_lists_all_sixteen() {
        let (router, _) = seeded();
        let (status, body) = call(&router, Method::GET, "/api/statuses", None).await;
        assert_eq!(status, StatusCode::OK);
        let list = body.as_array().unwrap();
        assert_eq!(list.len(), 16);
        assert_eq!(list[0]["status"], "complaint_unallocated");
        assert_eq!(list[0]["next"], json!(["ch_review"]));
        assert_eq!(list[3]["terminal"], true);
    }

    #[tokio::test]
    async fn test_unknown_api_route_is_404() {
        let (router, _) = seeded();
        let (status, body) = call(&router, Method::GET, "/api/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not found");
    }

    #[tokio::test]
    async fn test_get_missing_item_is_404() {
        let (router, _) = seeded();
        let (status, body) = call(&router, Method::GET, "/api/items/W-404", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_create_and_list_views() {
        let (router, _) = seeded();
        let (status, created) = call(
            &router,
            Method::POST,
            "/api/items",
            Some(json!({ "id": "W-3", "title": "third" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["status"], "complaint_unallocated");

        let (_, all) = call(&router, Method::GET, "/api/items", None).await;
        assert_eq!(all.as_array().unwrap().len(), 3);

        let (_, mine) = call(&router, Method::GET, "/api/items?view=handler&actor=alice", None).await;
        let ids: Vec<&str> = mine
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["W-1", "W-3"]);

        let (status, _) = call(&router, Method::GET, "/api/items?view=handler", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_pick_up_then_transition_accumulates_time() {
        let (router, clock) = seeded();
        let (status, item) = call(
            &router,
            Method::POST,
            "/api/items/W-2/pick-up",
            Some(json!({ "actor": "mahi" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(item["status"], "pick_up");
        assert_eq!(item["startTime"], 1_000);

        clock.advance(3_500);
        let (status, item) = call(
            &router,
            Method::POST,
            "/api/items/W-2/transition",
            Some(json!({ "status": "ref_to_ph" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(item["status"], "ref_to_ph");
        assert_eq!(item["spentMs"], 3_500);
    }

    #[tokio::test]
    async fn test_busy_actor_rejected() {
        let (router, _) = seeded();
        call(
            &router,
            Method::POST,
            "/api/items/W-2/pick-up",
            Some(json!({ "actor": "mahi" })),
        )
        .await;
        call(
            &router,
            Method::POST,
            "/api/items/W-1/allocate",
            Some(json!({ "handler": "mahi" })),
        )
        .await;
        let (status, body) = call(
            &router,
            Method::POST,
            "/api/items/W-1/pick-up",
            Some(json!({ "actor": "mahi" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "ACTOR_BUSY");
    }

    #[tokio::test]
    async fn test_invalid_transition_and_unknown_status() {
        let (router, _) = seeded();
        let (status, body) = call(
            &router,
            Method::POST,
            "/api/items/W-1/transition",
            Some(json!({ "status": "ch_complaint_closed" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "INVALID_TRANSITION");

        let (status, body) = call(
            &router,
            Method::POST,
            "/api/items/W-1/transition",
            Some(json!({ "status": "archived" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "UNKNOWN_STATUS");
    }

    #[tokio::test]
    async fn test_malformed_body_is_400() {
        let (router, _) = seeded();
        let (status, body) = call(
            &router,
            Method::POST,
            "/api/items/W-1/comments",
            Some(json!({ "author": "mahi" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_comment_update_and_delete() {
        let (router, _) = seeded();
        let (status, item) = call(
            &router,
            Method::POST,
            "/api/items/W-1/comments",
            Some(json!({ "author": "mahi", "text": "called client" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(item["comments"][0]["text"], "called client");

        let (status, item) = call(
            &router,
            Method::PUT,
            "/api/items/W-1",
            Some(json!({ "title": "renamed" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(item["title"], "renamed");

        let (status, _) = call(&router, Method::DELETE, "/api/items/W-1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = call(&router, Method::GET, "/api/items/W-1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_actions_and_summary() {
        let (router, _) = seeded();
        let (status, actions) = call(&router, Method::GET, "/api/items/W-1/actions?actor=mahi", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(actions[0]["action"], "allocate");

        let (status, summary) = call(&router, Method::GET, "/api/summary", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(summary["totals"]["total"], 2);
        assert_eq!(summary["totals"]["completed"], 0);
    }

    fn row_ids(rows: &Value) -> Vec<String> {
        rows.as_array()
            .unwrap()
            .iter()
            .map(|item| item["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_update_rejects_workflow_fields() {
        let (router, _) = seeded();
        let (status, body) = call(
            &router,
            Method::PUT,
            "/api/items/W-1",
            Some(json!({ "status": "ch_complaint_closed", "assignee": "eve" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");

        let (_, item) = call(&router, Method::GET, "/api/items/W-1", None).await;
        assert_eq!(item["status"], "complaint_unallocated");
        assert_eq!(item["assignee"], Value::Null);
    }

    #[tokio::test]
    async fn test_list_column_filters() {
        let (router, _) = seeded();
        call(
            &router,
            Method::POST,
            "/api/items/W-1/comments",
            Some(json!({ "author": "mahi", "text": "Refund requested" })),
        )
        .await;

        let (status, rows) = call(&router, Method::GET, "/api/items?id=W-2", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(row_ids(&rows), vec!["W-2"]);

        let (_, rows) = call(&router, Method::GET, "/api/items?comments=refund", None).await;
        assert_eq!(row_ids(&rows), vec!["W-1"]);

        let (_, rows) = call(&router, Method::GET, "/api/items?timeMinSecs=999999", None).await;
        assert!(row_ids(&rows).is_empty());

        let (_, rows) = call(&router, Method::GET, "/api/items?timeMaxSecs=10", None).await;
        assert_eq!(row_ids(&rows).len(), 2);

        let (_, rows) = call(
            &router,
            Method::GET,
            "/api/items?receivedFrom=0&receivedTo=9223372036854775807&timeMaxSecs=18446744073709551615",
            None,
        )
        .await;
        assert_eq!(row_ids(&rows).len(), 2);

        let (_, rows) = call(&router, Method::GET, "/api/items?startFrom=0", None).await;
        assert!(row_ids(&rows).is_empty());
    }

    #[tokio::test]
    async fn test_list_rejects_unknown_query_params() {
        let (router, _) = seeded();
        let (status, body) = call(&router, Method::GET, "/api/items?priority=high", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");

        let (status, _) = call(&router, Method::GET, "/api/items?timeMinSecs=lots", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_health_time_is_epoch_millis() {
        let (router, _) = seeded();
        let (_, body) = call(&router, Method::GET, "/api/health", None).await;
        assert!(body["time"].as_i64().unwrap() > 1_600_000_000_000);
    }

    #[tokio::test]
    async fn test_blank_actor_is_not_offered_pick_up() {
        let (router, _) = seeded();
        let (status, actions) = call(&router, Method::GET, "/api/items/W-2/actions?actor=", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(actions, json!([]));

        let (_, actions) = call(&router, Method::GET, "/api/items/W-2/actions?actor=mahi", None).await;
        assert_eq!(actions[0]["action"], "pick_up");
    }
}

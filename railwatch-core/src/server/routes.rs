use crate::server::assets::{INDEX, asset_response};
use crate::server::state::AppState;
use crate::server::ws;
use axum::extract::{Path, Request, State};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use http::header;
use serde::Serialize;
use std::time::Instant;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/update", get(update))
        .route("/update/", get(update))
        .route("/ws", get(ws::upgrade))
        .route("/ws/", get(ws::upgrade))
        .route("/static/*path", get(static_file))
        .route("/healthz", get(health))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn index() -> Response {
    asset_response(INDEX)
}

/// The pre-encoded current snapshot.
async fn update(State(state): State<AppState>) -> Response {
    let frame = state.store.frame();
    (
        [(header::CONTENT_TYPE, "application/json")],
        frame.json.to_string(),
    )
        .into_response()
}

async fn static_file(Path(path): Path<String>) -> Response {
    asset_response(&format!("static/{path}"))
}

#[derive(Debug, Serialize)]
pub(crate) struct Health {
    pub live: bool,
    pub updated: String,
    pub subscribers: usize,
}

async fn health(State(state): State<AppState>) -> Json<Health> {
    let snapshot = state.store.current();
    Json(Health {
        live: snapshot.live,
        updated: snapshot.updated(),
        subscribers: state.hub.subscriber_count(),
    })
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    response
}

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::app::init_roster;
use crate::config::RosterConfig;
use crate::data::RosterLoader;
use crate::fetch::JsonFetcher;
use crate::rng::Rng;
use crate::server::{api, static_files};
use crate::view::{render_page, ROSTER_ERROR_MESSAGE};

pub struct AppState {
    pub config: RosterConfig,
    pub fetcher: Arc<dyn JsonFetcher>,
}

impl AppState {
    pub fn new(config: RosterConfig, fetcher: Arc<dyn JsonFetcher>) -> Self {
        Self { config, fetcher }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let static_routes = static_files::static_routes(&state.config.site_root);
    Router::new()
        .route("/", get(index_page))
        .route("/index.html", get(index_page))
        .route("/api/health", get(health))
        .route("/api/roster", get(roster))
        .merge(static_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Every request loads the roster from scratch; nothing is cached between requests.
async fn index_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let mut rng = Rng::from_entropy();
    let view = init_roster(state.fetcher.as_ref(), state.config.paths.clone(), &mut rng).await;
    Html(render_page(&view.container))
}

async fn health() -> Json<api::HealthResponse> {
    Json(api::health_payload())
}

async fn roster(State(state): State<Arc<AppState>>) -> Response {
    let mut rng = Rng::from_entropy();
    let mut loader = RosterLoader::new(state.fetcher.as_ref(), state.config.paths.clone());
    match loader.load(&mut rng).await {
        Ok(outcome) => Json(api::roster_payload(outcome)).into_response(),
        Err(err) => {
            error!(error = %err, "unable to load roster");
            (
                StatusCode::BAD_GATEWAY,
                Json(api::error_payload(ROSTER_ERROR_MESSAGE)),
            )
                .into_response()
        }
    }
}

async fn not_found() -> (StatusCode, Json<api::ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(api::error_payload("Route not found")),
    )
}

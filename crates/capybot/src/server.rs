//! Axum router: liveness on `GET /`, chat turns on `POST /chat`.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use capybot_core::provider::ChatCompletionProvider;
use serde::{Deserialize, Serialize};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::AppResult,
    orchestrator::{ChatRequest, ChatResponse, TurnOrchestrator},
};

pub const READY_MESSAGE: &str = "Backend's ready to use";

/// Shared application state passed to all handlers.
pub struct AppState<B> {
    pub orchestrator: Arc<TurnOrchestrator<B>>,
}

impl<B> AppState<B> {
    pub fn new(orchestrator: TurnOrchestrator<B>) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
        }
    }
}

impl<B> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            orchestrator: Arc::clone(&self.orchestrator),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeResponse {
    pub message: String,
}

/// Builds the router with all routes and shared state.
pub fn router<B>(state: AppState<B>) -> Router
where
    B: ChatCompletionProvider + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home))
        .route("/chat", post(chat::<B>))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// `GET /`
async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        message: READY_MESSAGE.to_owned(),
    })
}

/// `POST /chat`
async fn chat<B>(
    State(state): State<AppState<B>>,
    Json(request): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>>
where
    B: ChatCompletionProvider + 'static,
{
    let orchestrator = Arc::clone(&state.orchestrator);
    let response = orchestrator.handle_detached(request).await?;
    Ok(Json(response))
}

//! HTTP transport module for the idea-brief service.
//!
//! Axum router over three POST endpoints plus a bare health route. Handlers
//! stay thin: extract the JSON body, call into `analysis`, wrap the typed
//! outcome. Malformed bodies are rejected by the `Json` extractor before a
//! handler runs.

use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::analysis;
use crate::clients::CompletionModel;
use crate::config::Config;
use crate::error::Result;
use crate::schemas::{
    AnalysisOutcome, AnalysisRequest, BriefRequest, CombinedOutcome, ProductBrief,
};

/// Shared state for the HTTP server: read-only configuration and the single
/// gateway instance, both established at startup.
#[derive(Clone)]
pub struct HttpState {
    pub config: Arc<Config>,
    pub gateway: Arc<dyn CompletionModel>,
}

/// Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    "ok"
}

pub async fn prompt_to_json_handler(
    State(state): State<HttpState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisOutcome>> {
    let outcome = analysis::analyze(state.gateway.as_ref(), &state.config, &request).await?;
    Ok(Json(outcome))
}

pub async fn generate_product_brief_handler(
    State(state): State<HttpState>,
    Json(request): Json<BriefRequest>,
) -> Result<Json<ProductBrief>> {
    let brief =
        analysis::generate_brief(state.gateway.as_ref(), &state.config, &request.context).await?;
    Ok(Json(brief))
}

pub async fn complete_analysis_handler(
    State(state): State<HttpState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<CombinedOutcome>> {
    let outcome =
        analysis::complete_analysis(state.gateway.as_ref(), &state.config, &request).await?;
    Ok(Json(outcome))
}

/// Build the application router.
pub fn router(state: HttpState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/prompt_to_json", post(prompt_to_json_handler))
        .route(
            "/generate_product_brief",
            post(generate_product_brief_handler),
        )
        .route("/complete_analysis", post(complete_analysis_handler))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_http_server(state: HttpState) -> anyhow::Result<()> {
    let bind = state.config.http_bind;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("idea-brief API listening on {}", bind);
    axum::serve(listener, app).await?;

    Ok(())
}

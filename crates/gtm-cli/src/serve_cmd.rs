use anyhow::Result;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use tower_http::cors::CorsLayer;

use gtm_core::{GtmInput, GtmPlan, LaunchStage, PricingStrategy, PrimaryGoal, Tone};

use crate::config::ServeConfig;

/// Message returned for any unexpected failure during generation.
pub const GENERATION_FAILED: &str = "Failed to generate GTM plan. Please try again.";

static INDEX_HTML: &str = include_str!("index.html");

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    /// Generic 500. The underlying cause is logged by the caller, never
    /// returned to the client.
    pub fn generation_failed() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: GENERATION_FAILED.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// State and response types
// ---------------------------------------------------------------------------

/// Plan synthesis function used by the generate handler.
pub type Synthesizer = fn(&GtmInput) -> GtmPlan;

#[derive(Clone)]
pub struct AppState {
    synthesizer: Synthesizer,
}

#[derive(Debug, Serialize)]
pub struct OptionResponse {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsResponse {
    pub launch_stage: Vec<OptionResponse>,
    pub primary_goal: Vec<OptionResponse>,
    pub pricing_strategy: Vec<OptionResponse>,
    pub tone: Vec<OptionResponse>,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn build_router() -> Router {
    build_router_with(gtm_core::synthesize)
}

pub fn build_router_with(synthesizer: Synthesizer) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/options", get(list_options))
        .route("/api/generate", post(generate))
        .layer(CorsLayer::permissive())
        .with_state(AppState { synthesizer })
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub async fn run_serve(config: &ServeConfig) -> Result<()> {
    let app = build_router();
    let addr = config.socket_addr()?;
    tracing::info!("gtm serve listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("gtm serve shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn list_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        launch_stage: LaunchStage::ALL
            .iter()
            .map(|v| OptionResponse {
                value: v.as_str(),
                label: v.label(),
            })
            .collect(),
        primary_goal: PrimaryGoal::ALL
            .iter()
            .map(|v| OptionResponse {
                value: v.as_str(),
                label: v.label(),
            })
            .collect(),
        pricing_strategy: PricingStrategy::ALL
            .iter()
            .map(|v| OptionResponse {
                value: v.as_str(),
                label: v.label(),
            })
            .collect(),
        tone: Tone::ALL
            .iter()
            .map(|v| OptionResponse {
                value: v.as_str(),
                label: v.label(),
            })
            .collect(),
    })
}

async fn generate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<axum::response::Response, AppError> {
    let payload: Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "rejected malformed request body");
        AppError::bad_request("Request body must be a JSON object")
    })?;

    let input = GtmInput::from_payload(&payload).map_err(|e| {
        tracing::warn!(field = e.field(), "rejected brief: {e}");
        AppError::bad_request(e.to_string())
    })?;

    let product = input.product_name.clone();
    let synthesizer = state.synthesizer;
    let plan = tokio::task::spawn_blocking(move || synthesizer(&input))
        .await
        .map_err(|e| {
            tracing::error!(product = %product, error = %e, "failed to generate GTM plan");
            AppError::generation_failed()
        })?;

    tracing::info!(product = %product, "generated GTM plan");
    Ok(Json(plan).into_response())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

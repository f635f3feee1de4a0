//! HTTP gateway built on axum.
//!
//! Three routes: `GET /` serves the embedded landing page, `POST /predict`
//! runs the prediction pipeline, `GET /health` reports model-load state.
//! All handlers share one read-only [`AppContext`] behind an `Arc` — the
//! model store never mutates after startup, so there is no locking.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde_json::Value;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::PredictError;
use crate::service::PredictionService;

/// Static landing page; its form posts to `/predict` from the browser.
const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Immutable per-process application context shared by all handlers.
#[derive(Debug)]
pub struct AppContext {
    service: PredictionService,
    started_at: DateTime<Utc>,
}

/// Thread-safe shared context reference for axum handlers.
pub type SharedContext = Arc<AppContext>;

impl AppContext {
    pub fn new(service: PredictionService) -> Self {
        Self {
            service,
            started_at: Utc::now(),
        }
    }

    pub fn service(&self) -> &PredictionService {
        &self.service
    }

    /// Uptime in seconds since the context was created.
    pub fn uptime_secs(&self) -> u64 {
        let elapsed = Utc::now() - self.started_at;
        elapsed.num_seconds().max(0) as u64
    }
}

/// Build an axum Router with `/`, `/predict`, and `/health` routes.
pub fn router(ctx: SharedContext) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/predict", post(predict_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

/// Landing page.
async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check endpoint.
async fn health_handler(State(ctx): State<SharedContext>) -> impl IntoResponse {
    let store = ctx.service().store();
    let body = serde_json::json!({
        "status": "ok",
        "model_loaded": store.is_loaded(),
        "features": store.feature_names().len(),
        "uptime_secs": ctx.uptime_secs(),
    });
    Json(body)
}

/// Prediction endpoint.
///
/// The body is parsed here rather than through the `Json` extractor so that
/// a malformed body produces the same `{success: false, error}` envelope as
/// every other failure.
async fn predict_handler(State(ctx): State<SharedContext>, body: String) -> Response {
    let parsed: Value = match serde_json::from_str(&body) {
        Ok(v) => v,
        Err(e) => {
            let err = PredictError::invalid_input(format!("invalid JSON body: {e}"));
            return error_response(&err).into_response();
        }
    };

    match ctx.service().predict(&parsed) {
        Ok(prediction) => (StatusCode::OK, Json(prediction)).into_response(),
        Err(e) => error_response(&e).into_response(),
    }
}

fn error_response(err: &PredictError) -> (StatusCode, Json<Value>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = serde_json::json!({
        "success": false,
        "error": err.to_string(),
    });
    (status, Json(body))
}

/// Serve on the configured address until the process is stopped.
pub async fn run(ctx: SharedContext, config: &ServerConfig) -> Result<(), std::io::Error> {
    let app = router(ctx);
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

//! HTTP boundary: `POST /predict` and `GET /health`.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use log::{error, info, warn};

use crate::error::PremiumError;
use crate::predictor::Predictor;
use crate::records::{PremiumResponse, RawInput};

/// Headers accepted for the API key, in lookup order.
pub const API_KEY_HEADERS: [&str; 2] = ["ocp-apim-subscription-key", "x-api-key"];

#[derive(Clone)]
pub struct AppState {
    predictor: Predictor,
    api_key: Option<Arc<str>>,
}

impl AppState {
    pub fn new(predictor: Predictor, api_key: Option<String>) -> Self {
        AppState {
            predictor,
            api_key: api_key.map(Arc::from),
        }
    }
}

/// Inference failure as seen by the client.
pub struct ApiError(PremiumError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("prediction failed: {}", self.0);
        let body = serde_json::json!({ "error": self.0.to_string() });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn predict(
    State(state): State<AppState>,
    Json(input): Json<RawInput>,
) -> Result<Json<PremiumResponse>, ApiError> {
    let predicted_premium = state.predictor.predict(&input).map_err(ApiError)?;
    Ok(Json(PremiumResponse { predicted_premium }))
}

fn presented_key(headers: &HeaderMap) -> Option<&str> {
    API_KEY_HEADERS
        .iter()
        .find_map(|name| headers.get(*name))
        .and_then(|value| value.to_str().ok())
}

async fn require_api_key(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if let Some(expected) = state.api_key.as_deref() {
        if presented_key(request.headers()) != Some(expected) {
            warn!("rejected request to {} without a valid API key", request.uri().path());
            return StatusCode::UNAUTHORIZED.into_response();
        }
    }
    next.run(request).await
}

pub fn router(state: AppState) -> Router {
    let predict_routes = Router::new()
        .route("/predict", post(predict))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_api_key));

    Router::new()
        .route("/health", get(health_check))
        .merge(predict_routes)
        .with_state(state)
}

pub async fn serve(addr: &str, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("premium estimator listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await
}

use crate::translator::{TranslateError, Translator};
use axum::{
    extract::{MatchedPath, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, error};

/// State for the SpaceAPI endpoints
#[derive(Clone)]
pub struct SpaceApiAppState {
    pub translator: Translator,
}

/// Create router serving the status document.
///
/// `/v14` and `/v15` are served by the same handler: the v15 document is
/// also valid v14. Only GET is routed; other methods get 405.
pub fn create_spaceapi_router(state: SpaceApiAppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/v14", get(get_status))
        .route("/v15", get(get_status))
        .route("/health", get(|| async { "ok" }))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// GET /v14, /v15 - current SpaceAPI document
async fn get_status(
    State(state): State<Arc<SpaceApiAppState>>,
    path: MatchedPath,
) -> Result<Response, AppError> {
    let body = state.translator.render().await?;

    debug!(route = %path.as_str(), bytes = body.len(), "Serving status document");

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

/// Application error types
enum AppError {
    Translation(TranslateError),
}

impl From<TranslateError> for AppError {
    fn from(e: TranslateError) -> Self {
        AppError::Translation(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Translation(e) => {
                error!(kind = e.kind(), error = %e, "Failed to build status document");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
        }
    }
}

use crate::client::{HttpTransport, PokeApi};
use crate::details::fetch_details;
use crate::error::ApiError;
use crate::view::DetailsView;
use axum::{
    Json, Router, debug_handler,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub struct AppState {
    pub api: PokeApi<HttpTransport>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Handler-side wrapper deciding the status code for an [`ApiError`].
pub struct ServerError(ApiError);

impl From<ApiError> for ServerError {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Transport { .. } => StatusCode::BAD_GATEWAY,
        };
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/pokemon/{name}", get(get_details_handler))
        .with_state(state)
}

#[debug_handler]
async fn get_details_handler(
    State(app_state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<DetailsView>, ServerError> {
    tracing::debug!("Details requested for {}", name);

    let details = fetch_details(&app_state.api, &name).await?;
    Ok(Json(DetailsView::from(&details)))
}

use axum::{extract::State, response::Html, Json};

use crate::AppState;

use super::{
    errors::DefaultApiError,
    models::{api_error::ApiError, api_status_response::ApiStatusResponse},
};

static INDEX_HTML: &str = include_str!("../../assets/index.html");

pub async fn get_root() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn get_status(State(state): State<AppState>) -> Result<Json<ApiStatusResponse>, ApiError> {
    match state.stability.get_balance().await {
        Ok(balance) => Ok(Json(ApiStatusResponse::connected(balance.credits))),
        Err(e) => {
            tracing::error!(%e, "API connection test failed");
            Err(DefaultApiError::ImageApiUnreachable.value())
        }
    }
}

use axum::{extract::State, http::StatusCode, Json};
use tracing::Instrument;
use uuid::Uuid;
use validator::Validate;

use crate::{
    app::{models::api_error::ApiError, structs::json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::generate_image_dto::GenerateImageDto, models::generated_image::GeneratedImage,
    service,
};

pub async fn generate_image(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<GenerateImageDto>,
) -> Result<Json<GeneratedImage>, ApiError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("generate_image", %request_id);

    async move {
        match dto.validate() {
            Ok(_) => match service::generate_image(&dto.sanitized(), &state.stability).await {
                Ok(image) => {
                    tracing::info!("image generated");
                    Ok(Json(image))
                }
                Err(e) => Err(e),
            },
            Err(e) => {
                tracing::debug!(%e, "rejected generation request");
                Err(ApiError {
                    code: StatusCode::BAD_REQUEST,
                    message: e.to_string(),
                })
            }
        }
    }
    .instrument(span)
    .await
}

use axum::extract::{Multipart, State};
use nutrivision_core::domain::food_analysis::{
    entities::{FoodAnalysis, INVALID_IMAGE_MESSAGE, ImageMimeType, ImagePayload},
    ports::FoodAnalysisService,
    services::MISSING_IMAGE_MESSAGE,
    value_objects::AnalyzeFoodImageInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

pub const SINGLE_IMAGE_MESSAGE: &str = "Please upload a single image.";

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeFoodResponse {
    pub data: FoodAnalysis,
}

/// Multipart form accepted by the image analysis endpoint (documentation only).
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct AnalyzeFoodImageForm {
    /// JPG or PNG food photo.
    image: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/image",
    tag = "food-analysis",
    summary = "Analyze food from image",
    description = "Identifies the food in a JPG or PNG photo and estimates its nutrition. The result becomes the current analysis.",
    request_body(content = AnalyzeFoodImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = AnalyzeFoodResponse),
        (status = 400, description = "Missing, repeated, oversized or unsupported image"),
        (status = 502, description = "The AI service failed or answered in an unexpected format")
    ),
)]
pub async fn analyze_food_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalyzeFoodResponse>, ApiError> {
    let max_image_size = state.args.upload.max_image_size;
    let mut image: Option<ImagePayload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some("image") {
            continue;
        }

        if image.is_some() {
            return Err(ApiError::BadRequest(SINGLE_IMAGE_MESSAGE.to_string()));
        }

        let mime_type = resolve_mime_type(field.content_type(), field.file_name())?;

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.len() > max_image_size {
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                max_image_size
            )));
        }

        image = Some(ImagePayload::new(mime_type, data.to_vec()));
    }

    let image = image.ok_or_else(|| ApiError::BadRequest(MISSING_IMAGE_MESSAGE.to_string()))?;

    let analysis = state
        .service
        .analyze_food_image(AnalyzeFoodImageInput { image })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeFoodResponse { data: analysis }))
}

/// Picks the image type from the part's content type, falling back to the
/// file extension when the client sent a generic type.
fn resolve_mime_type(
    content_type: Option<&str>,
    file_name: Option<&str>,
) -> Result<ImageMimeType, ApiError> {
    let declared = content_type
        .filter(|ct| !ct.is_empty() && *ct != "application/octet-stream");

    if let Some(content_type) = declared {
        return ImageMimeType::try_from(content_type).map_err(ApiError::from);
    }

    let extension = file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => Ok(ImageMimeType::Jpeg),
        Some("png") => Ok(ImageMimeType::Png),
        _ => Err(ApiError::BadRequest(INVALID_IMAGE_MESSAGE.to_string())),
    }
}

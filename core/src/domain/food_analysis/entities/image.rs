use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

pub const INVALID_IMAGE_MESSAGE: &str = "Please select a valid image file (JPG or PNG).";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ImageMimeType {
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[serde(rename = "image/png")]
    Png,
}

impl ImageMimeType {
    pub fn as_str(&self) -> &str {
        match self {
            ImageMimeType::Jpeg => "image/jpeg",
            ImageMimeType::Png => "image/png",
        }
    }
}

impl TryFrom<&str> for ImageMimeType {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        // Content types may carry parameters, e.g. "image/png; charset=binary".
        let essence = value.split(';').next().unwrap_or_default().trim();

        match essence.to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Ok(ImageMimeType::Jpeg),
            "image/png" => Ok(ImageMimeType::Png),
            _ => Err(CoreError::InvalidInput(INVALID_IMAGE_MESSAGE.to_string())),
        }
    }
}

/// Raw image bytes with the MIME type sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: ImageMimeType,
    pub data: Vec<u8>,
}

impl ImagePayload {
    pub fn new(mime_type: ImageMimeType, data: Vec<u8>) -> Self {
        Self { mime_type, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type_accepts_jpeg_and_png() {
        assert_eq!(
            ImageMimeType::try_from("image/jpeg").unwrap(),
            ImageMimeType::Jpeg
        );
        assert_eq!(
            ImageMimeType::try_from("IMAGE/PNG; charset=binary").unwrap(),
            ImageMimeType::Png
        );
    }

    #[test]
    fn test_mime_type_rejects_other_types() {
        let err = ImageMimeType::try_from("image/gif").unwrap_err();
        assert_eq!(err, CoreError::InvalidInput(INVALID_IMAGE_MESSAGE.to_string()));
        assert!(ImageMimeType::try_from("application/pdf").is_err());
    }
}

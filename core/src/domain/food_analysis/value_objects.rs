use crate::domain::food_analysis::entities::ImagePayload;

#[derive(Debug, Clone)]
pub struct AnalyzeFoodImageInput {
    pub image: ImagePayload,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateRecipeValidator {
    /// What to cook, e.g. "a low-carb breakfast with eggs".
    #[validate(length(min = 1, max = 2000, message = "Please describe the recipe you want."))]
    pub prompt: String,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LogMealValidator {
    #[validate(length(min = 1, max = 200, message = "Meal name is required"))]
    pub name: String,

    #[validate(range(min = 1, message = "Calories must be a positive number"))]
    pub calories: u32,
}

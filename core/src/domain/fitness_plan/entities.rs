use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::structured::StructuredResponse;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WorkoutSuggestion {
    pub activity: String,
    pub duration: String,
    pub intensity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FitnessPlan {
    pub calorie_burn_estimate: String,
    pub workout_suggestions: Vec<WorkoutSuggestion>,
    pub diet_recommendations: Vec<String>,
}

impl StructuredResponse for FitnessPlan {}

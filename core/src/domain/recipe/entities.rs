use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::structured::StructuredResponse;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub description: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<String>>,
}

impl StructuredResponse for Recipe {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is empty".to_string());
        }
        if self.ingredients.is_empty() {
            return Err("ingredients is empty".to_string());
        }
        if self.instructions.is_empty() {
            return Err("instructions is empty".to_string());
        }
        Ok(())
    }
}

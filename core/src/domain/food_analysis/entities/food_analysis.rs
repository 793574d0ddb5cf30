use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::structured::StructuredResponse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionInfo {
    /// Estimated calories in kcal.
    pub calories: f64,
    /// Estimated protein in grams.
    pub protein: String,
    /// Estimated carbohydrates in grams.
    pub carbohydrates: String,
    /// Estimated fat in grams.
    pub fat: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodAnalysis {
    pub food_name: String,
    pub origin: String,
    pub nutrition: NutritionInfo,
    pub facts: Vec<String>,
}

impl StructuredResponse for FoodAnalysis {
    fn validate(&self) -> Result<(), String> {
        if self.food_name.trim().is_empty() {
            return Err("foodName is empty".to_string());
        }
        if !self.nutrition.calories.is_finite() || self.nutrition.calories < 0.0 {
            return Err(format!(
                "calories must be a non-negative number, got {}",
                self.nutrition.calories
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::structured::parse_structured;

    #[test]
    fn test_food_analysis_parses_camel_case() {
        let raw = r#"{
            "foodName": "Margherita Pizza",
            "origin": "Naples, Italy",
            "nutrition": {"calories": 285, "protein": "12g", "carbohydrates": "36g", "fat": "10g"},
            "facts": ["a", "b", "c"]
        }"#;

        let analysis: FoodAnalysis = parse_structured(raw, "").unwrap();
        assert_eq!(analysis.food_name, "Margherita Pizza");
        assert_eq!(analysis.nutrition.calories, 285.0);
        assert_eq!(analysis.facts.len(), 3);
    }

    #[test]
    fn test_food_analysis_rejects_negative_calories() {
        let raw = r#"{
            "foodName": "Air",
            "origin": "Everywhere",
            "nutrition": {"calories": -5, "protein": "0", "carbohydrates": "0", "fat": "0"},
            "facts": []
        }"#;

        assert!(parse_structured::<FoodAnalysis>(raw, "").is_err());
    }

    #[test]
    fn test_food_analysis_requires_nutrition() {
        let raw = r#"{"foodName": "Soup", "origin": "Unknown", "facts": []}"#;
        assert!(parse_structured::<FoodAnalysis>(raw, "").is_err());
    }
}

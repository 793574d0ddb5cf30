use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealLog {
    pub id: Uuid,
    pub name: String,
    pub calories: u32,
    pub logged_at: DateTime<Utc>,
}

impl MealLog {
    pub fn new(name: String, calories: u32) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            calories,
            logged_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealLogSummary {
    pub meals: Vec<MealLog>,
    pub total_calories: u64,
}

impl From<Vec<MealLog>> for MealLogSummary {
    fn from(meals: Vec<MealLog>) -> Self {
        let total_calories = meals.iter().map(|meal| u64::from(meal.calories)).sum();

        Self {
            meals,
            total_calories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_empty_log_is_zero() {
        let summary = MealLogSummary::from(Vec::new());
        assert_eq!(summary.total_calories, 0);
        assert!(summary.meals.is_empty());
    }

    #[test]
    fn test_summary_sums_calories() {
        let summary = MealLogSummary::from(vec![
            MealLog::new("Eggs".to_string(), 155),
            MealLog::new("Toast".to_string(), 80),
            MealLog::new("Coffee".to_string(), 2),
        ]);
        assert_eq!(summary.total_calories, 237);
        assert_eq!(summary.meals[1].name, "Toast");
    }

    #[test]
    fn test_summary_does_not_overflow_u32() {
        let summary = MealLogSummary::from(vec![
            MealLog::new("Feast".to_string(), u32::MAX),
            MealLog::new("Dessert".to_string(), 1),
        ]);
        assert_eq!(summary.total_calories, u64::from(u32::MAX) + 1);
    }
}

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_log::{entities::MealLog, ports::MealLogRepository},
};

#[derive(Debug, Clone, Default)]
pub struct InMemoryMealLogRepository {
    meals: Arc<RwLock<Vec<MealLog>>>,
}

impl InMemoryMealLogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MealLogRepository for InMemoryMealLogRepository {
    async fn append(&self, meal: MealLog) -> Result<MealLog, CoreError> {
        self.meals.write().await.push(meal.clone());
        Ok(meal)
    }

    async fn list(&self) -> Result<Vec<MealLog>, CoreError> {
        Ok(self.meals.read().await.clone())
    }

    async fn clear(&self) -> Result<(), CoreError> {
        self.meals.write().await.clear();
        Ok(())
    }
}

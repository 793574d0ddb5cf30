use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::ports::LLMClient,
    meal_log::{
        entities::{MealLog, MealLogSummary},
        ports::{MealLogRepository, MealLogService},
        value_objects::LogMealInput,
    },
    session::ports::SessionRepository,
};

impl<LLM, SR, ML> MealLogService for Service<LLM, SR, ML>
where
    LLM: LLMClient,
    SR: SessionRepository,
    ML: MealLogRepository,
{
    async fn log_meal(&self, input: LogMealInput) -> Result<MealLog, CoreError> {
        let name = input.name.trim();
        if name.is_empty() || input.calories == 0 {
            return Err(CoreError::Invalid);
        }

        let meal = MealLog::new(name.to_string(), input.calories);
        let meal = self.meal_log_repository.append(meal).await?;

        tracing::debug!("Logged meal {} ({} kcal)", meal.name, meal.calories);

        Ok(meal)
    }

    async fn get_meals(&self) -> Result<MealLogSummary, CoreError> {
        let meals = self.meal_log_repository.list().await?;
        Ok(MealLogSummary::from(meals))
    }

    async fn clear_meals(&self) -> Result<(), CoreError> {
        self.meal_log_repository.clear().await
    }
}

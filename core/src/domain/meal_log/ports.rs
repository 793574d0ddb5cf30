use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_log::{
        entities::{MealLog, MealLogSummary},
        value_objects::LogMealInput,
    },
};

/// Repository trait for the meal log, kept in insertion order
#[cfg_attr(test, mockall::automock)]
pub trait MealLogRepository: Send + Sync {
    fn append(&self, meal: MealLog) -> impl Future<Output = Result<MealLog, CoreError>> + Send;

    fn list(&self) -> impl Future<Output = Result<Vec<MealLog>, CoreError>> + Send;

    fn clear(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait MealLogService: Send + Sync {
    fn log_meal(
        &self,
        input: LogMealInput,
    ) -> impl Future<Output = Result<MealLog, CoreError>> + Send;

    fn get_meals(&self) -> impl Future<Output = Result<MealLogSummary, CoreError>> + Send;

    fn clear_meals(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}

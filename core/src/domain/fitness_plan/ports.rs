use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    fitness_plan::{entities::FitnessPlan, value_objects::GetFitnessPlanInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait FitnessPlanService: Send + Sync {
    fn get_fitness_plan(
        &self,
        input: GetFitnessPlanInput,
    ) -> impl Future<Output = Result<FitnessPlan, CoreError>> + Send;

    /// Builds a plan from the committed food analysis and keeps it as the
    /// fitness guide result. Fails with [`CoreError::AnalysisRequired`] when
    /// nothing has been analyzed yet.
    fn plan_for_current_analysis(
        &self,
    ) -> impl Future<Output = Result<FitnessPlan, CoreError>> + Send;

    fn get_current_plan(
        &self,
    ) -> impl Future<Output = Result<Option<FitnessPlan>, CoreError>> + Send;
}

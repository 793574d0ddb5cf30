use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::ports::LLMClient,
    health::{entities::ReadinessStatus, ports::HealthCheckService},
    meal_log::ports::MealLogRepository,
    session::ports::SessionRepository,
};

impl<LLM, SR, ML> HealthCheckService for Service<LLM, SR, ML>
where
    LLM: LLMClient,
    SR: SessionRepository,
    ML: MealLogRepository,
{
    async fn health(&self) -> Result<u64, CoreError> {
        Ok(self.started_at.elapsed().as_secs())
    }

    async fn readiness(&self) -> Result<ReadinessStatus, CoreError> {
        Ok(ReadinessStatus {
            llm_configured: self.llm_configured,
        })
    }
}

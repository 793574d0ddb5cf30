use std::time::Instant;

use crate::domain::{
    common::UploadConfig, food_analysis::ports::LLMClient, meal_log::ports::MealLogRepository,
    session::ports::SessionRepository,
};

/// Application service implementing every feature port.
///
/// Each domain module adds its own `impl XxxService for Service<..>`.
#[derive(Clone)]
pub struct Service<LLM, SR, ML>
where
    LLM: LLMClient,
    SR: SessionRepository,
    ML: MealLogRepository,
{
    pub(crate) llm_client: LLM,
    pub(crate) session_repository: SR,
    pub(crate) meal_log_repository: ML,
    pub(crate) upload: UploadConfig,
    pub(crate) llm_configured: bool,
    pub(crate) started_at: Instant,
}

impl<LLM, SR, ML> Service<LLM, SR, ML>
where
    LLM: LLMClient,
    SR: SessionRepository,
    ML: MealLogRepository,
{
    pub fn new(
        llm_client: LLM,
        session_repository: SR,
        meal_log_repository: ML,
        upload: UploadConfig,
        llm_configured: bool,
    ) -> Self {
        Self {
            llm_client,
            session_repository,
            meal_log_repository,
            upload,
            llm_configured,
            started_at: Instant::now(),
        }
    }
}

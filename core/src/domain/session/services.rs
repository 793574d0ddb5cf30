use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::ports::LLMClient,
    meal_log::ports::MealLogRepository,
    session::{
        entities::SessionOverview,
        ports::{SessionRepository, SessionService},
        value_objects::NavigateInput,
    },
};

impl<LLM, SR, ML> SessionService for Service<LLM, SR, ML>
where
    LLM: LLMClient,
    SR: SessionRepository,
    ML: MealLogRepository,
{
    async fn get_session(&self) -> Result<SessionOverview, CoreError> {
        let state = self.session_repository.get_session().await?;
        Ok(SessionOverview::from(state))
    }

    async fn navigate(&self, input: NavigateInput) -> Result<SessionOverview, CoreError> {
        let change = self.session_repository.switch_view(input.view).await?;

        if change.state.current_view != input.view {
            tracing::debug!(
                "{} requires an analysis, falling back to {}",
                input.view.as_str(),
                change.state.current_view.as_str()
            );
        }

        // The meal log only lives inside the health tracker.
        if change.changed {
            self.meal_log_repository.clear().await?;
        }

        Ok(SessionOverview::from(change.state))
    }
}

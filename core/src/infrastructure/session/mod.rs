use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{
    common::entities::app_errors::CoreError,
    fitness_plan::entities::FitnessPlan,
    food_analysis::entities::FoodAnalysis,
    recipe::entities::Recipe,
    session::{
        entities::{SessionState, View, ViewChange},
        ports::SessionRepository,
    },
};

#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    state: Arc<RwLock<SessionState>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn get_session(&self) -> Result<SessionState, CoreError> {
        Ok(self.state.read().await.clone())
    }

    async fn switch_view(&self, view: View) -> Result<ViewChange, CoreError> {
        let mut state = self.state.write().await;
        let changed = state.switch_to(view);

        Ok(ViewChange {
            changed,
            state: state.clone(),
        })
    }

    async fn set_analysis(&self, analysis: FoodAnalysis) -> Result<(), CoreError> {
        self.state.write().await.replace_analysis(analysis);
        Ok(())
    }

    async fn set_fitness_plan(&self, plan: FitnessPlan, revision: u64) -> Result<bool, CoreError> {
        let mut state = self.state.write().await;
        if state.revision != revision {
            return Ok(false);
        }

        state.fitness_plan = Some(plan);
        Ok(true)
    }

    async fn set_recipe(&self, recipe: Option<Recipe>, revision: u64) -> Result<bool, CoreError> {
        let mut state = self.state.write().await;
        if state.revision != revision {
            return Ok(false);
        }

        state.recipe = recipe;
        Ok(true)
    }
}

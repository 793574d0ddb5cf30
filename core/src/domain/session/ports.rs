use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    fitness_plan::entities::FitnessPlan,
    food_analysis::entities::FoodAnalysis,
    recipe::entities::Recipe,
    session::{
        entities::{SessionOverview, SessionState, View, ViewChange},
        value_objects::NavigateInput,
    },
};

/// Storage for the single in-process session.
///
/// Every write happens under one lock so a commit can never interleave with a
/// navigation.
#[cfg_attr(test, mockall::automock)]
pub trait SessionRepository: Send + Sync {
    fn get_session(&self) -> impl Future<Output = Result<SessionState, CoreError>> + Send;

    fn switch_view(
        &self,
        view: View,
    ) -> impl Future<Output = Result<ViewChange, CoreError>> + Send;

    fn set_analysis(
        &self,
        analysis: FoodAnalysis,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Stores `plan` only if the session is still at `revision`. Returns whether it was stored.
    fn set_fitness_plan(
        &self,
        plan: FitnessPlan,
        revision: u64,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Stores `recipe` only if the session is still at `revision`. Returns whether it was stored.
    fn set_recipe(
        &self,
        recipe: Option<Recipe>,
        revision: u64,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait SessionService: Send + Sync {
    fn get_session(&self) -> impl Future<Output = Result<SessionOverview, CoreError>> + Send;

    /// Switches views. Any real change drops view-local results, so a view is
    /// always entered with a clean slate.
    fn navigate(
        &self,
        input: NavigateInput,
    ) -> impl Future<Output = Result<SessionOverview, CoreError>> + Send;
}

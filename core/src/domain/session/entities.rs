use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    fitness_plan::entities::FitnessPlan, food_analysis::entities::FoodAnalysis,
    recipe::entities::Recipe,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum View {
    #[default]
    Home,
    FoodChecker,
    FitnessGuide,
    HealthTracker,
    DietFoodMaker,
}

impl View {
    pub fn as_str(&self) -> &str {
        match self {
            View::Home => "HOME",
            View::FoodChecker => "FOOD_CHECKER",
            View::FitnessGuide => "FITNESS_GUIDE",
            View::HealthTracker => "HEALTH_TRACKER",
            View::DietFoodMaker => "DIET_FOOD_MAKER",
        }
    }
}

/// Single-user application state, held in memory for the process lifetime.
///
/// `analysis` is application level. `fitness_plan` and `recipe` belong to
/// their views and only live while the user stays on the view they were made in.
///
/// `revision` moves forward every time view-local results are invalidated. A
/// generation started at one revision may only be committed at that revision.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub current_view: View,
    pub analysis: Option<FoodAnalysis>,
    pub fitness_plan: Option<FitnessPlan>,
    pub recipe: Option<Recipe>,
    pub revision: u64,
}

impl SessionState {
    pub fn fitness_guide_enabled(&self) -> bool {
        self.analysis.is_some()
    }

    /// The view navigation actually lands on.
    pub fn resolve_view(&self, requested: View) -> View {
        match requested {
            View::FitnessGuide if !self.fitness_guide_enabled() => View::Home,
            view => view,
        }
    }

    /// Moves to `requested` after the fitness guide fallback. A real view change
    /// drops every view-local result, so both the view being left and the one
    /// being entered start clean. Returns whether the view changed.
    pub fn switch_to(&mut self, requested: View) -> bool {
        let target = self.resolve_view(requested);
        if target == self.current_view {
            return false;
        }

        self.current_view = target;
        self.fitness_plan = None;
        self.recipe = None;
        self.revision += 1;
        true
    }

    /// Commits a new analysis. The plan built for the previous food goes with it.
    pub fn replace_analysis(&mut self, analysis: FoodAnalysis) {
        self.analysis = Some(analysis);
        self.fitness_plan = None;
        self.revision += 1;
    }
}

/// Outcome of a navigation request, taken under a single write.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewChange {
    pub changed: bool,
    pub state: SessionState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SessionOverview {
    pub current_view: View,
    pub fitness_guide_enabled: bool,
    pub analysis: Option<FoodAnalysis>,
}

impl From<SessionState> for SessionOverview {
    fn from(state: SessionState) -> Self {
        Self {
            current_view: state.current_view,
            fitness_guide_enabled: state.fitness_guide_enabled(),
            analysis: state.analysis,
        }
    }
}

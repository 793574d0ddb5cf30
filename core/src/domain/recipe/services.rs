use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service, structured::parse_structured},
    food_analysis::ports::LLMClient,
    meal_log::ports::MealLogRepository,
    recipe::{
        entities::Recipe,
        ports::RecipeService,
        schema::{get_recipe_schema, recipe_prompt},
        value_objects::GenerateRecipeInput,
    },
    session::ports::SessionRepository,
};

pub const EMPTY_RECIPE_PROMPT_MESSAGE: &str = "Please describe the recipe you want.";

impl<LLM, SR, ML> RecipeService for Service<LLM, SR, ML>
where
    LLM: LLMClient,
    SR: SessionRepository,
    ML: MealLogRepository,
{
    async fn generate_recipe(&self, input: GenerateRecipeInput) -> Result<Recipe, CoreError> {
        if input.prompt.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                EMPTY_RECIPE_PROMPT_MESSAGE.to_string(),
            ));
        }

        // A new request replaces whatever the view was showing.
        let revision = self.session_repository.get_session().await?.revision;
        self.session_repository.set_recipe(None, revision).await?;

        let raw_response = self
            .llm_client
            .generate_with_text(recipe_prompt(&input.prompt), get_recipe_schema())
            .await?;

        let recipe: Recipe = parse_structured(&raw_response, " for recipe")?;

        let stored = self
            .session_repository
            .set_recipe(Some(recipe.clone()), revision)
            .await?;
        if !stored {
            tracing::debug!("Recipe arrived after the session moved on, not storing it");
        }

        Ok(recipe)
    }

    async fn get_current_recipe(&self) -> Result<Option<Recipe>, CoreError> {
        Ok(self.session_repository.get_session().await?.recipe)
    }
}

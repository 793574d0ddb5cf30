use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service, structured::parse_structured},
    food_analysis::{
        entities::FoodAnalysis,
        ports::{FoodAnalysisService, LLMClient},
        schema::{FOOD_ANALYSIS_PROMPT, get_food_analysis_schema},
        value_objects::AnalyzeFoodImageInput,
    },
    meal_log::ports::MealLogRepository,
    session::ports::SessionRepository,
};

pub const MISSING_IMAGE_MESSAGE: &str = "Please select an image first.";

impl<LLM, SR, ML> FoodAnalysisService for Service<LLM, SR, ML>
where
    LLM: LLMClient,
    SR: SessionRepository,
    ML: MealLogRepository,
{
    async fn analyze_food_image(
        &self,
        input: AnalyzeFoodImageInput,
    ) -> Result<FoodAnalysis, CoreError> {
        // 1. Validate image
        if input.image.data.is_empty() {
            return Err(CoreError::InvalidInput(MISSING_IMAGE_MESSAGE.to_string()));
        }

        if input.image.data.len() > self.upload.max_image_size {
            return Err(CoreError::InvalidInput(format!(
                "Image too large. Max size is {} bytes",
                self.upload.max_image_size
            )));
        }

        tracing::debug!(
            "Analyzing {} image of {} bytes",
            input.image.mime_type.as_str(),
            input.image.data.len()
        );

        // 2. Call LLM
        let raw_response = self
            .llm_client
            .generate_with_image(
                FOOD_ANALYSIS_PROMPT.to_string(),
                input.image,
                get_food_analysis_schema(),
            )
            .await?;

        // 3. Parse and validate response
        let analysis: FoodAnalysis = parse_structured(&raw_response, "")?;

        // 4. Commit as the current analysis
        self.session_repository
            .set_analysis(analysis.clone())
            .await?;

        Ok(analysis)
    }

    async fn get_current_analysis(&self) -> Result<Option<FoodAnalysis>, CoreError> {
        Ok(self.session_repository.get_session().await?.analysis)
    }
}

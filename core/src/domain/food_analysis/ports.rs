use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{
        entities::{FoodAnalysis, ImagePayload},
        value_objects::AnalyzeFoodImageInput,
    },
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image: ImagePayload,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for food analysis business logic
#[cfg_attr(test, mockall::automock)]
pub trait FoodAnalysisService: Send + Sync {
    /// Sends the image to the model and commits the validated analysis to the session.
    fn analyze_food_image(
        &self,
        input: AnalyzeFoodImageInput,
    ) -> impl Future<Output = Result<FoodAnalysis, CoreError>> + Send;

    fn get_current_analysis(
        &self,
    ) -> impl Future<Output = Result<Option<FoodAnalysis>, CoreError>> + Send;
}

use crate::{
    domain::common::{NutriVisionConfig, services::Service},
    infrastructure::{
        llm::GeminiLLMClient, meal_log::InMemoryMealLogRepository,
        session::InMemorySessionRepository,
    },
};

pub type NutriVisionService =
    Service<GeminiLLMClient, InMemorySessionRepository, InMemoryMealLogRepository>;

pub fn create_service(config: NutriVisionConfig) -> NutriVisionService {
    let llm_configured = !config.llm.gemini_api_key.trim().is_empty();
    if !llm_configured {
        tracing::warn!("GEMINI_API_KEY is not set, AI features will fail until it is configured");
    }

    let llm_client = GeminiLLMClient::from(&config.llm);

    tracing::info!(
        "Using Gemini model {} at {}",
        config.llm.gemini_model,
        config.llm.gemini_base_url
    );

    Service::new(
        llm_client,
        InMemorySessionRepository::new(),
        InMemoryMealLogRepository::new(),
        config.upload,
        llm_configured,
    )
}

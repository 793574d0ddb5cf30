use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service, structured::parse_structured},
    fitness_plan::{
        entities::FitnessPlan,
        ports::FitnessPlanService,
        schema::{fitness_plan_prompt, get_fitness_plan_schema},
        value_objects::GetFitnessPlanInput,
    },
    food_analysis::ports::LLMClient,
    meal_log::ports::MealLogRepository,
    session::ports::SessionRepository,
};

impl<LLM, SR, ML> FitnessPlanService for Service<LLM, SR, ML>
where
    LLM: LLMClient,
    SR: SessionRepository,
    ML: MealLogRepository,
{
    async fn get_fitness_plan(&self, input: GetFitnessPlanInput) -> Result<FitnessPlan, CoreError> {
        let prompt = fitness_plan_prompt(&input.food_name, input.calories);

        let raw_response = self
            .llm_client
            .generate_with_text(prompt, get_fitness_plan_schema())
            .await?;

        parse_structured(&raw_response, " for fitness plan")
    }

    async fn plan_for_current_analysis(&self) -> Result<FitnessPlan, CoreError> {
        let session = self.session_repository.get_session().await?;
        let analysis = session.analysis.ok_or(CoreError::AnalysisRequired)?;

        let plan = self
            .get_fitness_plan(GetFitnessPlanInput {
                food_name: analysis.food_name,
                calories: analysis.nutrition.calories,
            })
            .await?;

        let stored = self
            .session_repository
            .set_fitness_plan(plan.clone(), session.revision)
            .await?;
        if !stored {
            tracing::debug!("Fitness plan arrived after the session moved on, not storing it");
        }

        Ok(plan)
    }

    async fn get_current_plan(&self) -> Result<Option<FitnessPlan>, CoreError> {
        Ok(self.session_repository.get_session().await?.fitness_plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::UploadConfig,
        food_analysis::{
            entities::{FoodAnalysis, NutritionInfo},
            ports::MockLLMClient,
        },
        session::{entities::View, ports::SessionService, value_objects::NavigateInput},
    };
    use crate::infrastructure::{
        meal_log::InMemoryMealLogRepository, session::InMemorySessionRepository,
    };
    use mockall::predicate::always;
    use std::sync::Mutex;
    use tokio::sync::oneshot;

    const PLAN_JSON: &str = r#"{
        "calorieBurnEstimate": "Roughly 45 minutes of brisk activity burns this meal.",
        "workoutSuggestions": [
            {"activity": "Running", "duration": "30 minutes", "intensity": "Vigorous"},
            {"activity": "Cycling", "duration": "45 minutes", "intensity": "Moderate"},
            {"activity": "Swimming", "duration": "40 minutes", "intensity": "Moderate"}
        ],
        "dietRecommendations": ["Drink water", "Eat vegetables", "Limit sugar"]
    }"#;

    fn service(
        llm: MockLLMClient,
    ) -> Service<MockLLMClient, InMemorySessionRepository, InMemoryMealLogRepository> {
        Service::new(
            llm,
            InMemorySessionRepository::new(),
            InMemoryMealLogRepository::new(),
            UploadConfig::default(),
            true,
        )
    }

    fn analysis() -> FoodAnalysis {
        FoodAnalysis {
            food_name: "Lasagna".to_string(),
            origin: "Italy".to_string(),
            nutrition: NutritionInfo {
                calories: 600.0,
                protein: "30g".to_string(),
                carbohydrates: "50g".to_string(),
                fat: "28g".to_string(),
            },
            facts: vec![],
        }
    }

    #[tokio::test]
    async fn test_plan_requires_analysis_and_skips_llm() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().never();
        let service = service(llm);

        let err = service.plan_for_current_analysis().await.unwrap_err();
        assert_eq!(err, CoreError::AnalysisRequired);
    }

    #[tokio::test]
    async fn test_plan_uses_committed_analysis() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .withf(|prompt, _| {
                prompt.contains("a meal of Lasagna which has approximately 600 calories")
            })
            .times(1)
            .returning(|_, _| Box::pin(async { Ok(PLAN_JSON.to_string()) }));
        let service = service(llm);
        service
            .session_repository
            .set_analysis(analysis())
            .await
            .unwrap();

        let plan = service.plan_for_current_analysis().await.unwrap();
        assert_eq!(plan.workout_suggestions.len(), 3);
        assert_eq!(plan.workout_suggestions[0].activity, "Running");

        let stored = service.get_current_plan().await.unwrap();
        assert_eq!(stored, Some(plan));
    }

    #[tokio::test]
    async fn test_malformed_plan_is_not_committed() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .with(always(), always())
            .returning(|_, _| Box::pin(async { Ok("{\"calorieBurnEstimate\": 1}".to_string()) }));
        let service = service(llm);
        service
            .session_repository
            .set_analysis(analysis())
            .await
            .unwrap();

        let err = service.plan_for_current_analysis().await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "AI response for fitness plan was not in the expected format."
        );
        assert_eq!(service.get_current_plan().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_llm_failure_propagates() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _| {
            Box::pin(async { Err(CoreError::ExternalServiceError("boom".to_string())) })
        });
        let service = service(llm);

        let err = service
            .get_fitness_plan(GetFitnessPlanInput {
                food_name: "Rice".to_string(),
                calories: 200.0,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }

    #[tokio::test]
    async fn test_plan_is_not_stored_after_leaving_the_guide() {
        let (started_tx, started_rx) = oneshot::channel::<()>();
        let (release_tx, release_rx) = oneshot::channel::<()>();
        let channels = Mutex::new(Some((started_tx, release_rx)));

        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .times(1)
            .returning(move |_, _| {
                let (started_tx, release_rx) = channels.lock().unwrap().take().unwrap();
                Box::pin(async move {
                    let _ = started_tx.send(());
                    let _ = release_rx.await;
                    Ok(PLAN_JSON.to_string())
                })
            });
        let service = service(llm);
        service
            .session_repository
            .set_analysis(analysis())
            .await
            .unwrap();
        service
            .navigate(NavigateInput {
                view: View::FitnessGuide,
            })
            .await
            .unwrap();

        let (plan, _) = tokio::join!(service.plan_for_current_analysis(), async {
            started_rx.await.unwrap();
            service
                .navigate(NavigateInput {
                    view: View::HealthTracker,
                })
                .await
                .unwrap();
            release_tx.send(()).unwrap();
        });

        assert_eq!(plan.unwrap().workout_suggestions.len(), 3);
        assert_eq!(service.get_current_plan().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_plan_without_workouts_is_accepted() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_, _| {
            Box::pin(async {
                Ok(r#"{"calorieBurnEstimate": "Light meal", "workoutSuggestions": [], "dietRecommendations": []}"#.to_string())
            })
        });
        let service = service(llm);

        let plan = service
            .get_fitness_plan(GetFitnessPlanInput {
                food_name: "Cucumber".to_string(),
                calories: 15.0,
            })
            .await
            .unwrap();
        assert!(plan.workout_suggestions.is_empty());
    }
}

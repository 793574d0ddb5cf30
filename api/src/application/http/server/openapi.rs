use crate::application::http::{
    fitness_plan::router::FitnessPlanApiDoc, food_analysis::router::FoodAnalysisApiDoc,
    health::router::HealthApiDoc, meal_log::router::MealLogApiDoc, recipe::router::RecipeApiDoc,
    server::config::__path_get_config, session::router::SessionApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriVision API"
    ),
    paths(get_config),
    nest(
        (path = "/food-analysis", api = FoodAnalysisApiDoc),
        (path = "/fitness-plan", api = FitnessPlanApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/meals", api = MealLogApiDoc),
        (path = "/session", api = SessionApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_feature_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/config",
            "/food-analysis/image",
            "/fitness-plan",
            "/recipes",
            "/meals",
            "/session/navigate",
            "/health/ready",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected} in {paths:?}"
            );
        }
    }
}

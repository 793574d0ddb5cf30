#[derive(Debug, Clone)]
pub struct GetFitnessPlanInput {
    pub food_name: String,
    pub calories: f64,
}

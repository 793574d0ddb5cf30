#[derive(Debug, Clone)]
pub struct LogMealInput {
    pub name: String,
    pub calories: u32,
}

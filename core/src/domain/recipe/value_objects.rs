#[derive(Debug, Clone)]
pub struct GenerateRecipeInput {
    pub prompt: String,
}

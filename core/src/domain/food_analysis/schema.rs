use serde_json::json;

pub const FOOD_ANALYSIS_PROMPT: &str = "Analyze this image of food. Identify the food item, its likely origin, estimated nutritional information (calories, protein, carbs, fat), and three popular or interesting facts about it. Provide the output in a structured JSON format.";

/// Returns the JSON schema for food analysis LLM responses
pub fn get_food_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "foodName": { "type": "string", "description": "Name of the food item." },
            "origin": { "type": "string", "description": "Country or region of origin." },
            "nutrition": {
                "type": "object",
                "properties": {
                    "calories": { "type": "number", "description": "Estimated calories in kcal." },
                    "protein": { "type": "string", "description": "Estimated protein in grams." },
                    "carbohydrates": { "type": "string", "description": "Estimated carbohydrates in grams." },
                    "fat": { "type": "string", "description": "Estimated fat in grams." }
                },
                "required": ["calories", "protein", "carbohydrates", "fat"]
            },
            "facts": {
                "type": "array",
                "items": { "type": "string" },
                "description": "An array of 3 interesting facts about the food."
            }
        },
        "required": ["foodName", "origin", "nutrition", "facts"]
    })
}

use serde_json::json;

pub fn recipe_prompt(request: &str) -> String {
    format!(
        "Generate a healthy recipe based on the following user request: \"{}\". Provide the output in a structured JSON format. Include a recipe name, a brief description, prep time, cook time, servings, a list of ingredients, a list of instructions, and optional tips.",
        request
    )
}

/// Returns the JSON schema for recipe LLM responses
pub fn get_recipe_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "description": { "type": "string" },
            "prepTime": { "type": "string" },
            "cookTime": { "type": "string" },
            "servings": { "type": "string" },
            "ingredients": { "type": "array", "items": { "type": "string" } },
            "instructions": { "type": "array", "items": { "type": "string" } },
            "tips": { "type": "array", "items": { "type": "string" }, "nullable": true }
        },
        "required": [
            "name", "description", "prepTime", "cookTime",
            "servings", "ingredients", "instructions"
        ]
    })
}

use serde_json::json;

/// Renders the fitness plan instruction for a meal.
pub fn fitness_plan_prompt(food_name: &str, calories: f64) -> String {
    format!(
        "Based on consuming a meal of {} which has approximately {} calories, create a fitness and diet plan. Suggest 3 different workout activities with duration and intensity to help burn these calories. Also, provide 3 basic diet recommendations for maintaining a balanced lifestyle. Provide the output in a structured JSON format.",
        food_name, calories
    )
}

/// Returns the JSON schema for fitness plan LLM responses
pub fn get_fitness_plan_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "calorieBurnEstimate": {
                "type": "string",
                "description": "A brief statement about burning the consumed calories."
            },
            "workoutSuggestions": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "activity": { "type": "string", "description": "e.g., Running, Cycling, Weightlifting" },
                        "duration": { "type": "string", "description": "e.g., 30 minutes, 1 hour" },
                        "intensity": { "type": "string", "description": "e.g., Moderate, Vigorous" }
                    },
                    "required": ["activity", "duration", "intensity"]
                }
            },
            "dietRecommendations": {
                "type": "array",
                "items": { "type": "string" },
                "description": "An array of 3 diet tips."
            }
        },
        "required": ["calorieBurnEstimate", "workoutSuggestions", "dietRecommendations"]
    })
}

pub mod llm;
pub mod meal_log;
pub mod session;

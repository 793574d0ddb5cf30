pub mod fitness_plan;
pub mod food_analysis;
pub mod health;
pub mod meal_log;
pub mod recipe;
pub mod server;
pub mod session;

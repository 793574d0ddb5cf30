pub mod generate_recipe;
pub mod get_current_recipe;

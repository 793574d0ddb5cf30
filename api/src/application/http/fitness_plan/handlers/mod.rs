pub mod create_fitness_plan;
pub mod get_fitness_plan;

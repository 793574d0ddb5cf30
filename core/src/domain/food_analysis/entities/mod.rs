pub mod food_analysis;
pub mod image;

pub use food_analysis::*;
pub use image::*;

use std::sync::Arc;

use nutrivision_core::application::NutriVisionService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutriVisionService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutriVisionService) -> Self {
        Self { args, service }
    }
}

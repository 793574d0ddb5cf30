use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReadinessStatus {
    pub llm_configured: bool,
}

impl ReadinessStatus {
    pub fn is_ready(&self) -> bool {
        self.llm_configured
    }
}

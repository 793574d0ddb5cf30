use nutrivision_core::domain::session::entities::View;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct NavigateValidator {
    /// Target view. FITNESS_GUIDE falls back to HOME until a food has been analyzed.
    pub view: View,
}

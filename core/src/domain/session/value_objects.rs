use crate::domain::session::entities::View;

#[derive(Debug, Clone)]
pub struct NavigateInput {
    pub view: View,
}

pub mod get_session;
pub mod navigate;

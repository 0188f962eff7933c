pub mod app_error;
pub mod app_state;
pub mod models;

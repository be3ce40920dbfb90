pub mod app_context;
pub mod app_state;
pub mod board_state;

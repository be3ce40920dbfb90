pub mod error;
pub mod login;
pub mod todos;

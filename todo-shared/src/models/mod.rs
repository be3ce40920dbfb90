pub mod auth;
pub mod timestamp;
pub mod todo;
pub mod user;

pub use auth::{AuthDraft, AuthMode, LoginRequest, LoginResponse, RegisterRequest};
pub use timestamp::Timestamp;
pub use todo::{CreateTodoRequest, Todo, TodoDraft, UpdateTodoRequest};
pub use user::User;

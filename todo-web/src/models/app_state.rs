use todo_shared::{Session, models::User};
use yewdux::Store;

/// Render-facing mirror of the session store.
#[derive(Debug, Default, Clone, PartialEq, Store)]
pub struct AppState {
    pub user: Option<User>,
    pub token: String,
}

impl From<&Session> for AppState {
    fn from(session: &Session) -> Self {
        Self {
            user: session.user.clone(),
            token: session.token.clone(),
        }
    }
}

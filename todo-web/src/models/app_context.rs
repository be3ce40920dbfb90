use todo_shared::{
    ServiceConfig, SessionStore,
    api::{TodoServiceClient, UserServiceClient},
    auth::AuthController,
    todos::TodoController,
};
use tracing::warn;

use crate::browser::{BrowserNotifier, BrowserStorage};

/// Services shared with every component through a `ContextProvider`.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub session: SessionStore,
    users: UserServiceClient,
    todos: TodoServiceClient,
}

impl AppContext {
    pub fn new(config: ServiceConfig) -> Self {
        if let Err(problems) = config.validate() {
            for problem in problems {
                warn!(%problem, "service configuration");
            }
        }
        Self {
            session: SessionStore::new(BrowserStorage),
            users: UserServiceClient::new(config.clone()),
            todos: TodoServiceClient::new(config),
        }
    }

    pub fn auth(&self) -> AuthController<UserServiceClient, BrowserNotifier> {
        AuthController::new(self.users.clone(), self.session.clone(), BrowserNotifier)
    }

    pub fn todo_controller(&self) -> TodoController<TodoServiceClient, BrowserNotifier> {
        TodoController::new(self.todos.clone(), BrowserNotifier)
    }
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session
    }
}

//! # Todo Board
//!
//! The locally held, ordered sequence of todos and the controller that keeps
//! it in step with the todo service. Every controller call yields at most one
//! [`TodoAction`]; the board changes only when an action is applied, so a
//! failed request can never leave a partial update behind.

use tracing::{debug, error};

use crate::{
    api::TodoApi,
    models::{Todo, TodoDraft, UpdateTodoRequest},
    notify::{CREATE_FAILED, DELETE_FAILED, Notifier, UPDATE_FAILED},
};

/// A confirmed server-side change to apply to the local board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    /// The full list as returned by the service.
    Loaded(Vec<Todo>),
    /// A newly created todo.
    Created(Todo),
    /// The stored representation of the todo that was requested as `id`.
    Updated { id: i64, todo: Todo },
    /// The todo with this id no longer exists.
    Removed(i64),
}

/// Ordered todos, newest created first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoBoard {
    todos: Vec<Todo>,
}

impl TodoBoard {
    #[must_use]
    pub fn new(todos: Vec<Todo>) -> Self {
        Self { todos }
    }

    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: i64) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub fn apply(&mut self, action: TodoAction) {
        match action {
            TodoAction::Loaded(todos) => self.todos = todos,
            TodoAction::Created(todo) => self.todos.insert(0, todo),
            TodoAction::Updated { id, todo } => {
                for entry in self.todos.iter_mut().filter(|entry| entry.id == id) {
                    *entry = todo.clone();
                }
            }
            TodoAction::Removed(id) => self.todos.retain(|todo| todo.id != id),
        }
    }

    /// Consuming form of [`TodoBoard::apply`], convenient for reducers.
    #[must_use]
    pub fn applied(mut self, action: TodoAction) -> Self {
        self.apply(action);
        self
    }
}

/// Issues todo requests and turns their outcome into board actions.
///
/// Failures of mutating calls are logged and alerted once; a failed list is
/// only logged.
#[derive(Debug, Clone)]
pub struct TodoController<T, N> {
    api: T,
    notifier: N,
}

impl<T: TodoApi, N: Notifier> TodoController<T, N> {
    pub fn new(api: T, notifier: N) -> Self {
        Self { api, notifier }
    }

    pub async fn list(&self, token: &str) -> Option<TodoAction> {
        match self.api.list(token).await {
            Ok(todos) => {
                debug!(count = todos.len(), "fetched todos");
                Some(TodoAction::Loaded(todos))
            }
            Err(err) => {
                error!(error = %err, "failed to fetch todos");
                None
            }
        }
    }

    /// Create a todo from `draft`. Drafts with a blank title are skipped
    /// without contacting the service.
    pub async fn create(&self, token: &str, draft: &TodoDraft) -> Option<TodoAction> {
        let request = draft.to_request()?;
        match self.api.create(token, &request).await {
            Ok(todo) => {
                debug!(id = todo.id, "created todo");
                Some(TodoAction::Created(todo))
            }
            Err(err) => {
                error!(error = %err, "failed to create todo");
                self.notifier.alert(CREATE_FAILED);
                None
            }
        }
    }

    pub async fn toggle(&self, token: &str, id: i64, completed: bool) -> Option<TodoAction> {
        match self
            .api
            .update(token, id, &UpdateTodoRequest { completed })
            .await
        {
            Ok(todo) => Some(TodoAction::Updated { id, todo }),
            Err(err) => {
                error!(error = %err, id, "failed to update todo");
                self.notifier.alert(UPDATE_FAILED);
                None
            }
        }
    }

    pub async fn delete(&self, token: &str, id: i64) -> Option<TodoAction> {
        match self.api.delete(token, id).await {
            Ok(()) => Some(TodoAction::Removed(id)),
            Err(err) => {
                error!(error = %err, id, "failed to delete todo");
                self.notifier.alert(DELETE_FAILED);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::{ClientError, ClientResult},
        models::{CreateTodoRequest, Timestamp},
        notify::RecordingNotifier,
    };
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::sync::{Arc, Mutex};

    fn todo(id: i64, title: &str, completed: bool) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            description: None,
            completed,
            user_id: 1,
            created_at: Timestamp(Utc.with_ymd_and_hms(2025, 1, id as u32 % 28 + 1, 9, 0, 0).unwrap()),
        }
    }

    fn board() -> TodoBoard {
        TodoBoard::new(vec![todo(3, "c", false), todo(1, "a", false), todo(2, "b", true)])
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        List(String),
        Create(String, CreateTodoRequest),
        Update(String, i64, bool),
        Delete(String, i64),
    }

    #[derive(Clone, Default)]
    struct FakeTodoApi {
        offline: bool,
        stored: Vec<Todo>,
        calls: Arc<Mutex<Vec<Call>>>,
    }

    impl FakeTodoApi {
        fn offline() -> Self {
            Self {
                offline: true,
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn outcome<R>(&self, value: R) -> ClientResult<R> {
            if self.offline {
                Err(ClientError::transport("connection refused"))
            } else {
                Ok(value)
            }
        }
    }

    #[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
    #[cfg_attr(not(target_arch = "wasm32"), async_trait)]
    impl TodoApi for FakeTodoApi {
        async fn list(&self, token: &str) -> ClientResult<Vec<Todo>> {
            self.calls.lock().unwrap().push(Call::List(token.to_string()));
            self.outcome(self.stored.clone())
        }

        async fn create(&self, token: &str, request: &CreateTodoRequest) -> ClientResult<Todo> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Create(token.to_string(), request.clone()));
            self.outcome(todo(1, &request.title, false))
        }

        async fn update(&self, token: &str, id: i64, request: &UpdateTodoRequest) -> ClientResult<Todo> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Update(token.to_string(), id, request.completed));
            let mut updated = todo(id, "server copy", request.completed);
            updated.description = Some("from server".to_string());
            self.outcome(updated)
        }

        async fn delete(&self, token: &str, id: i64) -> ClientResult<()> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Delete(token.to_string(), id));
            self.outcome(())
        }
    }

    fn ids(board: &TodoBoard) -> Vec<i64> {
        board.todos().iter().map(|todo| todo.id).collect()
    }

    #[test]
    fn test_board_actions() {
        let mut board = board();
        board.apply(TodoAction::Created(todo(9, "new", false)));
        assert_eq!(ids(&board), vec![9, 3, 1, 2]);

        board.apply(TodoAction::Removed(1));
        assert_eq!(ids(&board), vec![9, 3, 2]);

        board.apply(TodoAction::Removed(42));
        assert_eq!(board.len(), 3);

        board.apply(TodoAction::Loaded(vec![todo(5, "only", false)]));
        assert_eq!(ids(&board), vec![5]);
        assert!(board.get(5).is_some());
        assert!(board.get(9).is_none());
    }

    #[tokio::test]
    async fn test_list_replaces_board_in_server_order() {
        let api = FakeTodoApi {
            stored: vec![todo(2, "b", false), todo(7, "g", true)],
            ..FakeTodoApi::default()
        };
        let controller = TodoController::new(api.clone(), RecordingNotifier::new());

        let action = controller.list("tok").await.unwrap();
        let board = board().applied(action);

        assert_eq!(ids(&board), vec![2, 7]);
        assert_eq!(api.calls(), vec![Call::List("tok".to_string())]);
    }

    #[tokio::test]
    async fn test_list_failure_is_silent() {
        let notifier = RecordingNotifier::new();
        let controller = TodoController::new(FakeTodoApi::offline(), notifier.clone());

        assert_eq!(controller.list("tok").await, None);
        assert_eq!(notifier.count(), 0);
    }

    #[tokio::test]
    async fn test_create_with_blank_title_sends_nothing() {
        let api = FakeTodoApi::default();
        let notifier = RecordingNotifier::new();
        let controller = TodoController::new(api.clone(), notifier.clone());

        for title in ["", "   ", "\n\t"] {
            let draft = TodoDraft {
                title: title.to_string(),
                description: "details".to_string(),
            };
            assert_eq!(controller.create("tok", &draft).await, None);
        }

        assert!(api.calls().is_empty());
        assert_eq!(notifier.count(), 0);
    }

    #[tokio::test]
    async fn test_create_prepends_server_todo() {
        let api = FakeTodoApi::default();
        let controller = TodoController::new(api.clone(), RecordingNotifier::new());
        let draft = TodoDraft {
            title: "Buy milk".to_string(),
            description: String::new(),
        };

        let mut board = TodoBoard::new(vec![todo(5, "older", false)]);
        board.apply(controller.create("tok", &draft).await.unwrap());

        assert_eq!(board.todos()[0], todo(1, "Buy milk", false));
        assert_eq!(board.len(), 2);
        assert_eq!(
            api.calls(),
            vec![Call::Create(
                "tok".to_string(),
                CreateTodoRequest {
                    title: "Buy milk".to_string(),
                    description: String::new(),
                }
            )]
        );
    }

    #[tokio::test]
    async fn test_toggle_replaces_only_matching_entry() {
        let controller = TodoController::new(FakeTodoApi::default(), RecordingNotifier::new());
        let before = board();

        let after = before
            .clone()
            .applied(controller.toggle("tok", 1, true).await.unwrap());

        assert_eq!(ids(&after), ids(&before));
        let toggled = after.get(1).unwrap();
        assert!(toggled.completed);
        assert_eq!(toggled.description.as_deref(), Some("from server"));
        assert_eq!(after.get(3), before.get(3));
        assert_eq!(after.get(2), before.get(2));
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one_entry() {
        let api = FakeTodoApi::default();
        let controller = TodoController::new(api.clone(), RecordingNotifier::new());

        let after = board().applied(controller.delete("tok", 1).await.unwrap());

        assert_eq!(ids(&after), vec![3, 2]);
        assert_eq!(api.calls(), vec![Call::Delete("tok".to_string(), 1)]);
    }

    #[tokio::test]
    async fn test_failed_mutations_leave_board_and_alert_once() {
        let draft = TodoDraft {
            title: "Buy milk".to_string(),
            description: String::new(),
        };

        let notifier = RecordingNotifier::new();
        let controller = TodoController::new(FakeTodoApi::offline(), notifier.clone());
        assert_eq!(controller.create("tok", &draft).await, None);
        assert_eq!(notifier.messages(), vec![CREATE_FAILED]);

        let notifier = RecordingNotifier::new();
        let controller = TodoController::new(FakeTodoApi::offline(), notifier.clone());
        assert_eq!(controller.toggle("tok", 1, true).await, None);
        assert_eq!(notifier.messages(), vec![UPDATE_FAILED]);

        let notifier = RecordingNotifier::new();
        let controller = TodoController::new(FakeTodoApi::offline(), notifier.clone());
        assert_eq!(controller.delete("tok", 1).await, None);
        assert_eq!(notifier.messages(), vec![DELETE_FAILED]);
    }

    #[tokio::test]
    async fn test_double_delete_surfaces_second_failure() {
        #[derive(Clone, Default)]
        struct GoneAfterFirst(Arc<Mutex<bool>>);

        #[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
        #[cfg_attr(not(target_arch = "wasm32"), async_trait)]
        impl TodoApi for GoneAfterFirst {
            async fn list(&self, _token: &str) -> ClientResult<Vec<Todo>> {
                Ok(Vec::new())
            }

            async fn create(&self, _token: &str, _request: &CreateTodoRequest) -> ClientResult<Todo> {
                Err(ClientError::rejected(500))
            }

            async fn update(&self, _token: &str, _id: i64, _request: &UpdateTodoRequest) -> ClientResult<Todo> {
                Err(ClientError::rejected(500))
            }

            async fn delete(&self, _token: &str, _id: i64) -> ClientResult<()> {
                let mut deleted = self.0.lock().unwrap();
                if *deleted {
                    Err(ClientError::rejected(404))
                } else {
                    *deleted = true;
                    Ok(())
                }
            }
        }

        let notifier = RecordingNotifier::new();
        let controller = TodoController::new(GoneAfterFirst::default(), notifier.clone());
        let mut board = board();

        if let Some(action) = controller.delete("tok", 3).await {
            board.apply(action);
        }
        if let Some(action) = controller.delete("tok", 3).await {
            board.apply(action);
        }

        assert_eq!(ids(&board), vec![1, 2]);
        assert_eq!(notifier.messages(), vec![DELETE_FAILED]);
    }
}

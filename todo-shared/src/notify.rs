//! User-visible, blocking notifications.

use std::{cell::RefCell, rc::Rc};

/// Shown when the user service rejects or cannot be reached for a login.
pub const LOGIN_FAILED: &str = "Login failed";
/// Shown when an account could not be created.
pub const REGISTRATION_FAILED: &str = "Registration failed";
/// Shown after an account was created; the form returns to login mode.
pub const REGISTRATION_SUCCEEDED: &str = "Registration successful! Please login.";
/// Shown when a new todo was not stored.
pub const CREATE_FAILED: &str = "Failed to create todo";
/// Shown when toggling a todo failed.
pub const UPDATE_FAILED: &str = "Failed to update todo";
/// Shown when a todo could not be deleted.
pub const DELETE_FAILED: &str = "Failed to delete todo";

/// Surfaces a message to the user, e.g. through `window.alert`.
pub trait Notifier {
    fn alert(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
    fn alert(&self, message: &str) {
        (**self).alert(message);
    }
}

/// Notifier that keeps every message, for tests and headless use.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Rc<RefCell<Vec<String>>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.messages.borrow().len()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

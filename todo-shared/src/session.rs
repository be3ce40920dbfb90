//! # Session Store
//!
//! Owns the signed-in user and bearer token, mirrors them into persistent
//! storage, and notifies subscribers whenever they change. The store is a
//! cheap, cloneable handle; every clone observes the same session.

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
};

use tracing::{debug, info, warn};

use crate::{
    errors::StorageError,
    models::User,
    storage::{KeyValueStorage, TOKEN_KEY, USER_KEY},
};

/// The pairing of a bearer token and the user it authenticates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Signed-in user; `None` when signed out.
    pub user: Option<User>,
    /// Bearer token for the todo service; empty when signed out.
    pub token: String,
}

impl Session {
    #[must_use]
    pub fn new(user: User, token: impl Into<String>) -> Self {
        Self {
            user: Some(user),
            token: token.into(),
        }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

type Listener = Rc<dyn Fn(&Session)>;

struct SessionInner {
    storage: Box<dyn KeyValueStorage>,
    state: RefCell<Session>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_listener: Cell<u64>,
}

/// Shared handle to the current session.
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<SessionInner>,
}

impl SessionStore {
    /// Create an empty, unauthenticated store backed by `storage`.
    pub fn new<S: KeyValueStorage + 'static>(storage: S) -> Self {
        Self {
            inner: Rc::new(SessionInner {
                storage: Box::new(storage),
                state: RefCell::new(Session::default()),
                listeners: RefCell::new(Vec::new()),
                next_listener: Cell::new(0),
            }),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.inner.state.borrow().clone()
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.inner.state.borrow().user.clone()
    }

    #[must_use]
    pub fn token(&self) -> String {
        self.inner.state.borrow().token.clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner.state.borrow().is_authenticated()
    }

    /// Adopt a persisted session when nobody is signed in yet.
    ///
    /// Both `token` and `user` must be present. A `user` entry that is not a
    /// valid serialized profile is treated as absent. Returns `true` when a
    /// persisted session was adopted.
    pub fn hydrate(&self) -> bool {
        if self.is_authenticated() {
            return false;
        }

        let storage = &self.inner.storage;
        let Some(token) = storage.get(TOKEN_KEY).filter(|token| !token.is_empty()) else {
            return false;
        };
        let Some(raw_user) = storage.get(USER_KEY) else {
            return false;
        };

        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => {
                debug!(username = %user.username, "restored persisted session");
                self.replace(Session::new(user, token));
                true
            }
            Err(err) => {
                warn!(error = %err, "ignoring malformed persisted user");
                false
            }
        }
    }

    /// Sign `user` in with `token` and persist both.
    ///
    /// The in-memory session is updated and subscribers are notified even if
    /// persisting fails; the failure is still reported to the caller.
    ///
    /// # Errors
    /// Returns a [`StorageError`] if either key could not be written.
    pub fn establish(&self, user: User, token: impl Into<String>) -> Result<(), StorageError> {
        let session = Session::new(user, token);
        let persisted = self.persist(&session);
        info!(
            username = session.user.as_ref().map_or("", |user| user.username.as_str()),
            "session established"
        );
        self.replace(session);
        persisted
    }

    /// Sign out: forget the session in memory and in storage.
    pub fn clear(&self) {
        self.inner.storage.remove(TOKEN_KEY);
        self.inner.storage.remove(USER_KEY);
        info!("session cleared");
        self.replace(Session::default());
    }

    /// Register `listener` to be called with the new session after every
    /// change. The listener stays registered until the returned
    /// [`Subscription`] is dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Session) + 'static,
    {
        let id = self.inner.next_listener.get();
        self.inner.next_listener.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        Subscription {
            store: Rc::downgrade(&self.inner),
            id,
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn persist(&self, session: &Session) -> Result<(), StorageError> {
        let storage = &self.inner.storage;
        storage.set(TOKEN_KEY, &session.token)?;
        let serialized = serde_json::to_string(&session.user)
            .map_err(|err| StorageError::new(USER_KEY, err.to_string()))?;
        storage.set(USER_KEY, &serialized)
    }

    fn replace(&self, next: Session) {
        {
            let mut state = self.inner.state.borrow_mut();
            if *state == next {
                return;
            }
            *state = next.clone();
        }

        // Listeners may read or subscribe to the store while being notified.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&next);
        }
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &*self.inner.state.borrow())
            .field("subscribers", &self.subscriber_count())
            .finish_non_exhaustive()
    }
}

/// Keeps a [`SessionStore`] listener registered while alive.
#[must_use = "dropping a Subscription unsubscribes the listener"]
pub struct Subscription {
    store: Weak<SessionInner>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner
                .listeners
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

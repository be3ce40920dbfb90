//! Redirect policy run on every navigation and every session change.

use crate::session::SessionStore;

/// Path of the login/register view.
pub const LOGIN_PATH: &str = "/login";

/// Path of the todo list, the default view for signed-in users.
pub const HOME_PATH: &str = "/";

/// Where the guard sends the user instead of the requested path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    ToLogin,
    ToHome,
}

impl Redirect {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::ToLogin => LOGIN_PATH,
            Self::ToHome => HOME_PATH,
        }
    }
}

/// Whether `path` addresses the login view, with or without a trailing
/// slash and under any mount prefix.
#[must_use]
pub fn is_login_path(path: &str) -> bool {
    path.trim_end_matches('/').ends_with(LOGIN_PATH)
}

/// The redirect, if any, for a visit to `path`.
#[must_use]
pub fn evaluate(path: &str, authenticated: bool) -> Option<Redirect> {
    match (authenticated, is_login_path(path)) {
        (false, false) => Some(Redirect::ToLogin),
        (true, true) => Some(Redirect::ToHome),
        _ => None,
    }
}

/// Hydrate `session` from storage if needed, then evaluate `path`.
#[must_use]
pub fn check(session: &SessionStore, path: &str) -> Option<Redirect> {
    session.hydrate();
    evaluate(path, session.is_authenticated())
}

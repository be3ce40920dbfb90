use serde::{Deserialize, Serialize};

/// Body of `POST /login` on the user service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login answer. Extra fields such as `token_type` are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Body of `POST /register` on the user service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Which half of the auth form is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    #[must_use]
    pub const fn is_login(self) -> bool {
        matches!(self, Self::Login)
    }
}

/// Unsaved credentials typed into the auth form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthDraft {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl AuthDraft {
    /// Body for `POST /login`; the email field is not sent.
    #[must_use]
    pub fn login_request(&self) -> LoginRequest {
        LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }

    /// Body for `POST /register`, sent exactly as typed.
    #[must_use]
    pub fn register_request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

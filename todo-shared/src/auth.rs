//! Login, registration, and logout against the user service.

use tracing::{error, info, warn};

use crate::{
    api::UserApi,
    errors::{ClientError, ClientResult},
    models::{LoginRequest, RegisterRequest, User},
    notify::{LOGIN_FAILED, Notifier, REGISTRATION_FAILED, REGISTRATION_SUCCEEDED},
    session::SessionStore,
};

/// Drives the auth view: talks to the user service and fills the session.
#[derive(Debug, Clone)]
pub struct AuthController<A, N> {
    api: A,
    session: SessionStore,
    notifier: N,
}

impl<A: UserApi, N: Notifier> AuthController<A, N> {
    pub fn new(api: A, session: SessionStore, notifier: N) -> Self {
        Self {
            api,
            session,
            notifier,
        }
    }

    /// Sign in and store the token with a placeholder profile.
    ///
    /// A blank `access_token` counts as a failed login. On failure the user
    /// is alerted and the session is left untouched.
    ///
    /// # Errors
    /// Returns the service error after it has been surfaced to the user.
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<()> {
        let username = request.username.as_str();
        let token = self.api.login(request).await.and_then(|response| {
            if response.access_token.trim().is_empty() {
                Err(ClientError::decode("empty access_token"))
            } else {
                Ok(response.access_token)
            }
        });

        match token {
            Ok(token) => {
                info!(%username, "login succeeded");
                if let Err(err) = self.session.establish(User::placeholder(username), token) {
                    warn!(error = %err, "session will not survive a reload");
                }
                Ok(())
            }
            Err(err) => {
                error!(error = %err, %username, "login failed");
                self.notifier.alert(LOGIN_FAILED);
                Err(err)
            }
        }
    }

    /// Create an account. Success is confirmed to the user; the caller is
    /// expected to switch back to the login form. Never signs in.
    ///
    /// # Errors
    /// Returns the service error after it has been surfaced to the user.
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<()> {
        let username = request.username.as_str();
        match self.api.register(request).await {
            Ok(()) => {
                info!(%username, "registration succeeded");
                self.notifier.alert(REGISTRATION_SUCCEEDED);
                Ok(())
            }
            Err(err) => {
                error!(error = %err, %username, "registration failed");
                self.notifier.alert(REGISTRATION_FAILED);
                Err(err)
            }
        }
    }

    /// Sign out locally. The user service keeps no session to end.
    pub fn logout(&self) {
        self.session.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{AuthDraft, LoginResponse},
        notify::RecordingNotifier,
        storage::{MemoryStorage, TOKEN_KEY, USER_KEY},
    };
    use async_trait::async_trait;
    use std::{
        rc::Rc,
        sync::{Arc, Mutex},
    };

    #[derive(Clone, Default)]
    struct FakeUserApi {
        reject_with: Option<u16>,
        issued_token: Option<String>,
        logins: Arc<Mutex<Vec<LoginRequest>>>,
        registrations: Arc<Mutex<Vec<RegisterRequest>>>,
    }

    impl FakeUserApi {
        fn rejecting(status: u16) -> Self {
            Self {
                reject_with: Some(status),
                ..Self::default()
            }
        }
    }

    #[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
    #[cfg_attr(not(target_arch = "wasm32"), async_trait)]
    impl UserApi for FakeUserApi {
        async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
            self.logins.lock().unwrap().push(request.clone());
            match self.reject_with {
                Some(status) => Err(ClientError::rejected(status)),
                None => Ok(LoginResponse {
                    access_token: self
                        .issued_token
                        .clone()
                        .unwrap_or_else(|| format!("token-for-{}", request.username)),
                }),
            }
        }

        async fn register(&self, request: &RegisterRequest) -> ClientResult<()> {
            self.registrations.lock().unwrap().push(request.clone());
            match self.reject_with {
                Some(status) => Err(ClientError::rejected(status)),
                None => Ok(()),
            }
        }
    }

    fn credentials(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    fn registration(username: &str, email: &str) -> RegisterRequest {
        AuthDraft {
            username: username.to_string(),
            email: email.to_string(),
            password: "pw".to_string(),
        }
        .register_request()
    }

    type TestController = AuthController<FakeUserApi, RecordingNotifier>;

    fn controller(api: FakeUserApi) -> (TestController, SessionStore, RecordingNotifier) {
        let session = SessionStore::new(MemoryStorage::new());
        let notifier = RecordingNotifier::new();
        (
            AuthController::new(api, session.clone(), notifier.clone()),
            session,
            notifier,
        )
    }

    #[tokio::test]
    async fn test_login_establishes_placeholder_session() {
        let api = FakeUserApi::default();
        let (auth, session, notifier) = controller(api.clone());

        auth.login(&credentials("alice", "pw")).await.unwrap();

        assert_eq!(session.token(), "token-for-alice");
        let user = session.user().unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(notifier.count(), 0);
        assert_eq!(
            api.logins.lock().unwrap()[0],
            LoginRequest {
                username: "alice".to_string(),
                password: "pw".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_login_failure_alerts_and_keeps_session() {
        let (auth, session, notifier) = controller(FakeUserApi::rejecting(401));

        let err = auth.login(&credentials("alice", "wrong")).await.unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert!(!session.is_authenticated());
        assert!(session.token().is_empty());
        assert_eq!(notifier.messages(), vec![LOGIN_FAILED]);
    }

    #[tokio::test]
    async fn test_blank_access_token_is_a_failed_login() {
        for issued in ["", "   "] {
            let api = FakeUserApi {
                issued_token: Some(issued.to_string()),
                ..FakeUserApi::default()
            };
            let (auth, session, notifier) = controller(api);

            let err = auth.login(&credentials("alice", "pw")).await.unwrap_err();

            assert!(matches!(err, ClientError::Decode { .. }), "{err:?}");
            assert!(!session.is_authenticated());
            assert!(session.token().is_empty());
            assert_eq!(notifier.messages(), vec![LOGIN_FAILED]);
        }
    }

    #[tokio::test]
    async fn test_register_confirms_without_signing_in() {
        let api = FakeUserApi::default();
        let (auth, session, notifier) = controller(api.clone());

        auth.register(&registration("bob", "bob@mail.test")).await.unwrap();

        assert!(!session.is_authenticated());
        assert_eq!(notifier.messages(), vec![REGISTRATION_SUCCEEDED]);
        assert_eq!(api.registrations.lock().unwrap()[0].email, "bob@mail.test");
    }

    #[tokio::test]
    async fn test_register_failure_alerts() {
        let (auth, _, notifier) = controller(FakeUserApi::rejecting(400));
        assert!(auth.register(&registration("bob", "bob@mail.test")).await.is_err());
        assert_eq!(notifier.messages(), vec![REGISTRATION_FAILED]);
    }

    #[tokio::test]
    async fn test_logout_after_login_clears_everything() {
        let storage = Rc::new(MemoryStorage::new());
        let session = SessionStore::new(Rc::clone(&storage));
        let auth = AuthController::new(
            FakeUserApi::default(),
            session.clone(),
            RecordingNotifier::new(),
        );

        auth.login(&credentials("carol", "pw")).await.unwrap();
        assert!(storage.contains(TOKEN_KEY));
        assert!(storage.contains(USER_KEY));

        auth.logout();

        assert_eq!(session.user(), None);
        assert!(session.token().is_empty());
        assert!(!storage.contains(TOKEN_KEY));
        assert!(!storage.contains(USER_KEY));
    }
}

//! Service endpoint configuration
//!
//! The browser build has no runtime environment, so defaults can be baked in
//! at compile time through `TODO_USER_SERVICE_URL` and
//! `TODO_TODO_SERVICE_URL`. Native builds may also override them at runtime.

use url::Url;

/// Default base URL of the user service
pub const DEFAULT_USER_SERVICE_URL: &str = "http://localhost:8001";

/// Default base URL of the todo service
pub const DEFAULT_TODO_SERVICE_URL: &str = "http://localhost:8002";

/// Base URLs of the two backend collaborators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// User service base URL (login and registration)
    pub user_service_url: String,

    /// Todo service base URL (todo CRUD)
    pub todo_service_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(
            option_env!("TODO_USER_SERVICE_URL").unwrap_or(DEFAULT_USER_SERVICE_URL),
            option_env!("TODO_TODO_SERVICE_URL").unwrap_or(DEFAULT_TODO_SERVICE_URL),
        )
    }
}

impl ServiceConfig {
    /// Create a configuration from explicit base URLs. Trailing slashes are
    /// dropped so paths can be appended uniformly.
    pub fn new(user_service_url: impl Into<String>, todo_service_url: impl Into<String>) -> Self {
        Self {
            user_service_url: trim_base(user_service_url.into()),
            todo_service_url: trim_base(todo_service_url.into()),
        }
    }

    /// Defaults, overridden by `TODO_USER_SERVICE_URL` and
    /// `TODO_TODO_SERVICE_URL` from the process environment.
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn from_env() -> Self {
        Self::with_overrides(|key| std::env::var(key).ok())
    }

    /// Defaults, overridden by whatever `lookup` returns for
    /// `TODO_USER_SERVICE_URL` and `TODO_TODO_SERVICE_URL`. Blank values are
    /// ignored.
    #[must_use]
    pub fn with_overrides<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let pick = |key: &str, fallback: String| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(fallback)
        };
        Self::new(
            pick("TODO_USER_SERVICE_URL", defaults.user_service_url),
            pick("TODO_TODO_SERVICE_URL", defaults.todo_service_url),
        )
    }

    /// Check that both base URLs are absolute http(s) URLs.
    ///
    /// # Errors
    /// Returns one message per invalid field.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let errors: Vec<String> = [
            ("user_service_url", &self.user_service_url),
            ("todo_service_url", &self.todo_service_url),
        ]
        .into_iter()
        .filter_map(|(field, value)| match Url::parse(value) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => None,
            Ok(url) => Some(format!("{field}: unsupported scheme '{}'", url.scheme())),
            Err(err) => Some(format!("{field}: {err}")),
        })
        .collect();

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Absolute URL of a user service endpoint.
    #[must_use]
    pub fn user_endpoint(&self, path: &str) -> String {
        join(&self.user_service_url, path)
    }

    /// Absolute URL of a todo service endpoint.
    #[must_use]
    pub fn todo_endpoint(&self, path: &str) -> String {
        join(&self.todo_service_url, path)
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base, path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_local_services() {
        let config = ServiceConfig::new(DEFAULT_USER_SERVICE_URL, DEFAULT_TODO_SERVICE_URL);
        assert_eq!(config.user_endpoint("login"), "http://localhost:8001/login");
        assert_eq!(config.todo_endpoint("/todos"), "http://localhost:8002/todos");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        let config = ServiceConfig::new("http://users.test/", "http://todos.test/api//");
        assert_eq!(config.user_endpoint("/register"), "http://users.test/register");
        assert_eq!(config.todo_endpoint("todos/4"), "http://todos.test/api/todos/4");
    }

    #[test]
    fn test_validate_reports_each_bad_field() {
        let config = ServiceConfig::new("localhost:8001", "ftp://todos.test");
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("user_service_url"));
        assert!(errors[1].contains("unsupported scheme 'ftp'"));
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let config = ServiceConfig::with_overrides(|key| match key {
            "TODO_USER_SERVICE_URL" => Some("https://users.test/".to_string()),
            "TODO_TODO_SERVICE_URL" => Some("  ".to_string()),
            _ => None,
        });

        assert_eq!(config.user_service_url, "https://users.test");
        assert_eq!(config.todo_service_url, ServiceConfig::default().todo_service_url);
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        let expected = ServiceConfig::with_overrides(|key| std::env::var(key).ok());
        assert_eq!(ServiceConfig::from_env(), expected);
    }

    #[test]
    fn test_default_is_valid() {
        assert!(ServiceConfig::default().validate().is_ok());
    }
}

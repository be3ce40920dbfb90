//! HTTP clients for the user service and the todo service.
//!
//! The service traits are the seam the controllers are written against, so
//! tests can substitute in-memory fakes for the network.

use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;

use crate::{
    config::ServiceConfig,
    errors::ClientResult,
    models::{CreateTodoRequest, LoginRequest, LoginResponse, RegisterRequest, Todo, UpdateTodoRequest},
};

/// Authentication endpoints of the user service.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait UserApi {
    /// Exchange credentials for an access token.
    ///
    /// # Errors
    /// Returns an error on transport failure, a non-success status, or a body
    /// without `access_token`.
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse>;

    /// Create an account. Only the status of the answer is meaningful.
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-success status.
    async fn register(&self, request: &RegisterRequest) -> ClientResult<()>;
}

/// Todo CRUD endpoints; every call is authorized with a bearer token.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait TodoApi {
    /// Fetch every todo of the token's owner, in server order.
    async fn list(&self, token: &str) -> ClientResult<Vec<Todo>>;

    /// Create a todo and return the stored record.
    async fn create(&self, token: &str, request: &CreateTodoRequest) -> ClientResult<Todo>;

    /// Change the completion flag of a todo and return the stored record.
    async fn update(&self, token: &str, id: i64, request: &UpdateTodoRequest) -> ClientResult<Todo>;

    /// Delete a todo.
    async fn delete(&self, token: &str, id: i64) -> ClientResult<()>;
}

/// reqwest-backed [`UserApi`].
#[derive(Clone, Debug)]
pub struct UserServiceClient {
    config: ServiceConfig,
    client: Client,
}

impl UserServiceClient {
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    #[must_use]
    pub fn with_client(config: ServiceConfig, client: Client) -> Self {
        Self { config, client }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl UserApi for UserServiceClient {
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        let url = self.config.user_endpoint("login");
        debug!(%url, username = %request.username, "POST login");
        let response = self.client.post(url).json(request).send().await?;
        Ok(successful(response)?.json().await?)
    }

    async fn register(&self, request: &RegisterRequest) -> ClientResult<()> {
        let url = self.config.user_endpoint("register");
        debug!(%url, username = %request.username, "POST register");
        let response = self.client.post(url).json(request).send().await?;
        successful(response)?;
        Ok(())
    }
}

/// reqwest-backed [`TodoApi`].
#[derive(Clone, Debug)]
pub struct TodoServiceClient {
    config: ServiceConfig,
    client: Client,
}

impl TodoServiceClient {
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    #[must_use]
    pub fn with_client(config: ServiceConfig, client: Client) -> Self {
        Self { config, client }
    }

    fn todo_url(&self, id: i64) -> String {
        self.config.todo_endpoint(&format!("todos/{id}"))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl TodoApi for TodoServiceClient {
    async fn list(&self, token: &str) -> ClientResult<Vec<Todo>> {
        let url = self.config.todo_endpoint("todos");
        debug!(%url, "GET todos");
        let response = self.client.get(url).bearer_auth(token).send().await?;
        Ok(successful(response)?.json().await?)
    }

    async fn create(&self, token: &str, request: &CreateTodoRequest) -> ClientResult<Todo> {
        let url = self.config.todo_endpoint("todos");
        debug!(%url, "POST todo");
        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;
        Ok(successful(response)?.json().await?)
    }

    async fn update(&self, token: &str, id: i64, request: &UpdateTodoRequest) -> ClientResult<Todo> {
        let url = self.todo_url(id);
        debug!(%url, completed = request.completed, "PUT todo");
        let response = self
            .client
            .put(url)
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;
        Ok(successful(response)?.json().await?)
    }

    async fn delete(&self, token: &str, id: i64) -> ClientResult<()> {
        let url = self.todo_url(id);
        debug!(%url, "DELETE todo");
        let response = self.client.delete(url).bearer_auth(token).send().await?;
        successful(response)?;
        Ok(())
    }
}

fn successful(response: Response) -> ClientResult<Response> {
    Ok(response.error_for_status()?)
}

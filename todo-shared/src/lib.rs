#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Shared building blocks for the todo web client.
//!
//! Everything in this crate is target independent: the browser crate plugs
//! in its own storage, notifier, and HTTP transport, while tests run the
//! same session and controller logic natively.

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod guard;
pub mod models;
pub mod notify;
pub mod session;
pub mod storage;
pub mod todos;

pub use config::ServiceConfig;
pub use errors::{ClientError, ClientResult, StorageError};
pub use session::{Session, SessionStore, Subscription};

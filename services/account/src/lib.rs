//! Account management client
//!
//! Login, registration, and profile update against a remote account
//! service. The pipeline runs validators, then a controller, then the API
//! client, and finally updates the session model.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use account::client::ApiClient;
//! use account::controllers::handle_login;
//! use account::models::LoginForm;
//! use account::session::SessionModel;
//! use common::config::ClientConfig;
//! use common::storage::FileStorage;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::from_env()?;
//!     let mut session = SessionModel::restore(Arc::new(FileStorage::new(&config.storage_dir)));
//!     let api = ApiClient::new(config)?;
//!
//!     let form = LoginForm {
//!         email: "ada@example.com".to_string(),
//!         password: "Analytical1!".to_string(),
//!     };
//!     let result = handle_login(&api, &mut session, form).await;
//!     println!("logged in: {}", result.is_success());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod constants;
pub mod controllers;
pub mod error;
pub mod models;
pub mod session;
pub mod validation;

pub use client::{AccountApi, ApiClient};
pub use controllers::ControllerResult;
pub use error::{ApiError, ApiResult};
pub use session::SessionModel;

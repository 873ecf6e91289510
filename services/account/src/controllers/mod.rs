//! Use-case controllers: validate, submit, then update the session
//!
//! Each controller runs its field validators first and returns the
//! collected errors without touching the network when any fail. Otherwise it
//! performs exactly one API call and, on success, updates the
//! [`SessionModel`](crate::session::SessionModel). Controllers never panic;
//! every outcome is a [`ControllerResult`].

pub mod login;
pub mod profile;
pub mod registration;

pub use login::{handle_login, handle_logout};
pub use profile::{load_profile, update_profile};
pub use registration::handle_register;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::ApiError;
use crate::validation::FieldValidation;

/// Field name to validation message
pub type FieldErrors = BTreeMap<String, String>;

/// Uniform outcome of a controller invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControllerResult<T = ()> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<FieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T> ControllerResult<T> {
    /// Successful outcome without payload
    pub fn ok() -> Self {
        Self {
            success: true,
            errors: None,
            error: None,
            data: None,
        }
    }

    /// Successful outcome carrying `data`
    pub fn with_data(data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::ok()
        }
    }

    /// Field-level validation failure. `errors` must name at least one field.
    pub(crate) fn invalid(errors: FieldErrors) -> Self {
        debug_assert!(!errors.is_empty(), "validation failure without field errors");
        Self {
            success: false,
            errors: Some(errors),
            error: None,
            data: None,
        }
    }

    /// Operation-level failure (network or server)
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            errors: None,
            error: Some(error.into()),
            data: None,
        }
    }

    /// Operation-level failure from an API error, using `fallback` when it has no text
    pub(crate) fn from_api_error(err: &ApiError, fallback: &str) -> Self {
        let message = err.to_string();
        if message.trim().is_empty() {
            Self::failed(fallback)
        } else {
            Self::failed(message)
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Field errors, present only on validation failure
    pub fn errors(&self) -> Option<&FieldErrors> {
        self.errors.as_ref()
    }

    /// Error message for one field
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors.as_ref()?.get(field).map(String::as_str)
    }

    /// Operation-level error message
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Accumulates per-field validation outcomes for one form
#[derive(Debug, Default)]
pub(crate) struct FormValidator {
    errors: FieldErrors,
}

impl FormValidator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn check(&mut self, field: &str, outcome: FieldValidation) -> &mut Self {
        if let Err(message) = outcome {
            self.errors.insert(field.to_string(), message);
        }
        self
    }

    /// `Err` with every collected error when any field failed
    pub(crate) fn finish(self) -> Result<(), FieldErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Scripted in-memory stand-in for the account service

    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use common::storage::MemoryStorage;
    use reqwest::StatusCode;

    use crate::client::{
        AccountApi, LoginRequest, LoginResponse, ProfileUpdate, RegisterRequest, RegisterResponse,
    };
    use crate::error::{ApiError, ApiResult};
    use crate::models::User;
    use crate::session::SessionModel;

    /// One recorded call against [`FakeApi`]
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Login(LoginRequest),
        Register(RegisterRequest),
        Logout,
        GetProfile { token: Option<String> },
        UpdateProfile { token: Option<String>, update: ProfileUpdate },
    }

    /// Canned outcome for the next call
    pub enum Reply {
        Login(LoginResponse),
        Register(RegisterResponse),
        Logout,
        Profile(User),
        Reject(StatusCode, &'static str),
    }

    #[derive(Default)]
    pub struct FakeApi {
        replies: Mutex<VecDeque<Reply>>,
        calls: Mutex<Vec<Call>>,
    }

    impl FakeApi {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reply(self, reply: Reply) -> Self {
            if let Ok(mut replies) = self.replies.lock() {
                replies.push_back(reply);
            }
            self
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().map(|c| c.clone()).unwrap_or_default()
        }

        fn record(&self, call: Call) -> Option<Reply> {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push(call);
            }
            self.replies.lock().ok()?.pop_front()
        }

        fn unexpected() -> ApiError {
            ApiError::rejected(StatusCode::NOT_IMPLEMENTED, "unexpected call")
        }
    }

    #[async_trait]
    impl AccountApi for FakeApi {
        async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
            match self.record(Call::Login(request.clone())) {
                Some(Reply::Login(response)) => Ok(response),
                Some(Reply::Reject(status, body)) => Err(ApiError::rejected(status, body)),
                _ => Err(Self::unexpected()),
            }
        }

        async fn register(&self, request: &RegisterRequest) -> ApiResult<RegisterResponse> {
            match self.record(Call::Register(request.clone())) {
                Some(Reply::Register(response)) => Ok(response),
                Some(Reply::Reject(status, body)) => Err(ApiError::rejected(status, body)),
                _ => Err(Self::unexpected()),
            }
        }

        async fn logout(&self) -> ApiResult<()> {
            match self.record(Call::Logout) {
                Some(Reply::Logout) => Ok(()),
                Some(Reply::Reject(status, body)) => Err(ApiError::rejected(status, body)),
                _ => Err(Self::unexpected()),
            }
        }

        async fn get_profile(&self, token: Option<&str>) -> ApiResult<User> {
            let call = Call::GetProfile {
                token: token.map(str::to_string),
            };
            match self.record(call) {
                Some(Reply::Profile(user)) => Ok(user),
                Some(Reply::Reject(status, body)) => Err(ApiError::rejected(status, body)),
                _ => Err(Self::unexpected()),
            }
        }

        async fn update_profile(
            &self,
            token: Option<&str>,
            update: &ProfileUpdate,
        ) -> ApiResult<User> {
            let call = Call::UpdateProfile {
                token: token.map(str::to_string),
                update: update.clone(),
            };
            match self.record(call) {
                Some(Reply::Profile(user)) => Ok(user),
                Some(Reply::Reject(status, body)) => Err(ApiError::rejected(status, body)),
                _ => Err(Self::unexpected()),
            }
        }
    }

    pub fn empty_session() -> (SessionModel, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        (SessionModel::new(storage.clone()), storage)
    }

    pub fn user(name: &str, email: &str) -> User {
        User {
            id: Some("1".to_string()),
            full_name: name.to_string(),
            email: email.to_string(),
            ..User::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_form_validator_collects_every_failure() {
        let mut validator = FormValidator::new();
        validator
            .check("email", Err("Email is required".to_string()))
            .check("password", Ok(()))
            .check("fullName", Err("Name is too short".to_string()));

        let errors = validator.finish().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["email"], "Email is required");
        assert_eq!(errors["fullName"], "Name is too short");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "validation failure without field errors")]
    fn test_invalid_requires_field_errors() {
        let _: ControllerResult = ControllerResult::invalid(FieldErrors::new());
    }

    #[test]
    fn test_result_serializes_only_present_fields() -> serde_json::Result<()> {
        let ok: ControllerResult = ControllerResult::ok();
        assert_eq!(serde_json::to_value(&ok)?, json!({"success": true}));

        let failed: ControllerResult = ControllerResult::failed("Unauthorized");
        assert_eq!(
            serde_json::to_value(&failed)?,
            json!({"success": false, "error": "Unauthorized"})
        );

        let mut errors = FieldErrors::new();
        errors.insert("email".to_string(), "Email is required".to_string());
        let invalid: ControllerResult = ControllerResult::invalid(errors);
        assert_eq!(
            serde_json::to_value(&invalid)?,
            json!({"success": false, "errors": {"email": "Email is required"}})
        );

        let with_data = ControllerResult::with_data(3);
        assert_eq!(
            serde_json::to_value(&with_data)?,
            json!({"success": true, "data": 3})
        );
        Ok(())
    }
}

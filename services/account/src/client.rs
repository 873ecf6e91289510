//! REST client for the remote account service
//!
//! One method per remote action. Each call is a single attempt: no retries
//! and no client-side timeout. Failures come back as [`ApiError`] values,
//! never as panics.

use async_trait::async_trait;
use common::config::ClientConfig;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{Instrument, debug, info_span, warn};

use crate::constants::{
    GET_PROFILE_PATH, LOGIN_PATH, LOGOUT_PATH, REGISTER_PATH, UPDATE_PROFILE_PATH, USER_AGENT,
};
use crate::error::{ApiError, ApiResult};
use crate::models::User;

/// Request for user login
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for user login
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Request for user registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Response for user registration
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub user: Option<User>,
}

/// Request for a profile update
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Remote operations of the account service
#[async_trait]
pub trait AccountApi: Send + Sync {
    /// `POST /api/auth/login`
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse>;

    /// `POST /api/auth/register`
    async fn register(&self, request: &RegisterRequest) -> ApiResult<RegisterResponse>;

    /// `POST /api/auth/logout`
    async fn logout(&self) -> ApiResult<()>;

    /// `GET /api/user/profile`, bearer-authenticated when `token` is set
    async fn get_profile(&self, token: Option<&str>) -> ApiResult<User>;

    /// `PUT /api/user/update`, bearer-authenticated when `token` is set
    async fn update_profile(
        &self,
        token: Option<&str>,
        update: &ProfileUpdate,
    ) -> ApiResult<User>;
}

/// reqwest-backed account service client
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
}

impl ApiClient {
    /// Create a new client for the service at `config.api_base_url`
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self { http, config })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.config.api_base_url
    }

    /// Send a request, turning transport failures and non-success statuses into errors
    async fn execute(
        &self,
        method: &'static str,
        url: &str,
        request: RequestBuilder,
    ) -> ApiResult<Response> {
        let span = info_span!("account.request", http.method = method, url = %url);

        let response = request.send().instrument(span).await.map_err(|e| {
            warn!("{} {} failed: {}", method, url, e);
            ApiError::Transport(e)
        })?;

        let status = response.status();
        debug!("{} {} -> {}", method, url, status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::rejected(status, &body);
            warn!("{} {} rejected: {}", method, url, err);
            return Err(err);
        }

        Ok(response)
    }

    async fn execute_json<T: DeserializeOwned>(
        &self,
        method: &'static str,
        url: &str,
        request: RequestBuilder,
    ) -> ApiResult<T> {
        let response = self.execute(method, url, request).await?;
        response.json::<T>().await.map_err(ApiError::Decode)
    }
}

fn with_bearer(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token.filter(|t| !t.is_empty()) {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

#[async_trait]
impl AccountApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        let url = self.config.endpoint(LOGIN_PATH);
        let builder = self.http.post(&url).json(request);
        self.execute_json("POST", &url, builder).await
    }

    async fn register(&self, request: &RegisterRequest) -> ApiResult<RegisterResponse> {
        let url = self.config.endpoint(REGISTER_PATH);
        let builder = self.http.post(&url).json(request);
        self.execute_json("POST", &url, builder).await
    }

    async fn logout(&self) -> ApiResult<()> {
        let url = self.config.endpoint(LOGOUT_PATH);
        let builder = self.http.post(&url);
        self.execute("POST", &url, builder).await?;
        Ok(())
    }

    async fn get_profile(&self, token: Option<&str>) -> ApiResult<User> {
        let url = self.config.endpoint(GET_PROFILE_PATH);
        let builder = with_bearer(self.http.get(&url), token);
        self.execute_json("GET", &url, builder).await
    }

    async fn update_profile(
        &self,
        token: Option<&str>,
        update: &ProfileUpdate,
    ) -> ApiResult<User> {
        let url = self.config.endpoint(UPDATE_PROFILE_PATH);
        let builder = with_bearer(self.http.put(&url), token).json(update);
        self.execute_json("PUT", &url, builder).await
    }
}

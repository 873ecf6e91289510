//! User model and related functionality

use serde::{Deserialize, Serialize};

/// User identity record as returned by the account service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "UserPayload")]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Wire shape accepted for a user. Some deployments send `full_name`
/// instead of (or next to) `fullName`; `fullName` wins when both are set.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserPayload {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default, rename = "full_name")]
    full_name_snake: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
}

impl From<UserPayload> for User {
    fn from(payload: UserPayload) -> Self {
        let full_name = payload
            .full_name
            .filter(|name| !name.is_empty())
            .or(payload.full_name_snake)
            .unwrap_or_default();

        Self {
            id: payload.id,
            full_name,
            email: payload.email.unwrap_or_default(),
            phone: payload.phone,
            address: payload.address,
            created_at: payload.created_at,
            updated_at: payload.updated_at,
        }
    }
}

/// Authentication state held by the session model
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl AuthState {
    /// Whether neither a token nor a user is held
    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.user.is_none()
    }
}

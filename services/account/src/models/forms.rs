//! Form payloads submitted by the view layer

use serde::{Deserialize, Serialize};

use crate::models::User;

/// Login form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Profile update form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateForm {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl ProfileUpdateForm {
    /// Whether this form differs from the values it was prefilled with
    pub fn has_changes(&self, original: &ProfileUpdateForm) -> bool {
        self != original
    }
}

impl From<&User> for ProfileUpdateForm {
    /// Prefill the form from a stored user; missing optional fields become empty inputs
    fn from(user: &User) -> Self {
        Self {
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            phone: Some(user.phone.clone().unwrap_or_default()),
            address: Some(user.address.clone().unwrap_or_default()),
        }
    }
}

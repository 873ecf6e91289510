//! Fixed endpoint paths and user-facing messages

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const LOGOUT_PATH: &str = "/api/auth/logout";
pub const GET_PROFILE_PATH: &str = "/api/user/profile";
pub const UPDATE_PROFILE_PATH: &str = "/api/user/update";

pub const LOGIN_SUCCESS: &str = "Login successful";
pub const REGISTER_SUCCESS: &str = "Registration successful";
pub const PROFILE_UPDATE_SUCCESS: &str = "Profile updated successfully";
pub const LOGOUT_SUCCESS: &str = "Logged out";

pub const USER_AGENT: &str = concat!("account-client/", env!("CARGO_PKG_VERSION"));

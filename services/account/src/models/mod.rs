//! Account client models

pub mod forms;
pub mod user;

// Re-export for convenience
pub use forms::{LoginForm, ProfileUpdateForm, RegistrationForm};
pub use user::{AuthState, User};

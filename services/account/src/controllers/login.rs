//! Login and logout use cases

use tracing::{info, warn};

use crate::client::{AccountApi, LoginRequest};
use crate::controllers::{ControllerResult, FormValidator};
use crate::models::LoginForm;
use crate::session::SessionModel;
use crate::validation::{validate_email, validate_password};

/// Validate the login form, authenticate, and store token and user
pub async fn handle_login<A>(
    api: &A,
    session: &mut SessionModel,
    form: LoginForm,
) -> ControllerResult
where
    A: AccountApi + ?Sized,
{
    let mut validator = FormValidator::new();
    validator
        .check("email", validate_email(&form.email))
        .check("password", validate_password(&form.password));
    if let Err(errors) = validator.finish() {
        return ControllerResult::invalid(errors);
    }

    info!("Login attempt for user: {}", form.email);

    let request = LoginRequest {
        email: form.email,
        password: form.password,
    };

    match api.login(&request).await {
        Ok(response) => {
            session.set_token(Some(response.token));
            session.set_user(response.user);
            ControllerResult::ok()
        }
        Err(e) => ControllerResult::from_api_error(&e, "Login failed"),
    }
}

/// Sign out remotely and clear the local session.
///
/// The session is cleared even when the remote call fails; the result still
/// reports that failure.
pub async fn handle_logout<A>(api: &A, session: &mut SessionModel) -> ControllerResult
where
    A: AccountApi + ?Sized,
{
    info!("Logout request");

    let outcome = api.logout().await;
    session.clear();

    match outcome {
        Ok(()) => ControllerResult::ok(),
        Err(e) => {
            warn!("Remote logout failed, local session cleared anyway: {}", e);
            ControllerResult::from_api_error(&e, "Logout failed")
        }
    }
}

//! Registration use case

use tracing::info;

use crate::client::{AccountApi, RegisterRequest};
use crate::controllers::{ControllerResult, FormValidator};
use crate::models::RegistrationForm;
use crate::session::SessionModel;
use crate::validation::{validate_email, validate_name, validate_password, validate_password_match};

/// Validate the registration form, create the account, and store the returned user.
///
/// No token is stored: a registered user still has to log in.
pub async fn handle_register<A>(
    api: &A,
    session: &mut SessionModel,
    form: RegistrationForm,
) -> ControllerResult
where
    A: AccountApi + ?Sized,
{
    let mut validator = FormValidator::new();
    validator
        .check("fullName", validate_name(&form.full_name))
        .check("email", validate_email(&form.email))
        .check("password", validate_password(&form.password))
        .check(
            "confirmPassword",
            validate_password_match(&form.password, &form.confirm_password),
        );
    if let Err(errors) = validator.finish() {
        return ControllerResult::invalid(errors);
    }

    info!("Registration attempt for user: {}", form.email);

    let request = RegisterRequest {
        full_name: form.full_name,
        email: form.email,
        password: form.password,
    };

    match api.register(&request).await {
        Ok(response) => {
            if let Some(user) = response.user {
                session.set_user(user);
            }
            ControllerResult::ok()
        }
        Err(e) => ControllerResult::from_api_error(&e, "Registration failed"),
    }
}

//! Profile load and update use cases

use tracing::info;

use crate::client::{AccountApi, ProfileUpdate};
use crate::controllers::{ControllerResult, FormValidator};
use crate::models::{ProfileUpdateForm, User};
use crate::session::SessionModel;
use crate::validation::{validate_address, validate_email, validate_name, validate_phone};

/// Fetch the current profile and store it as the session user
pub async fn load_profile<A>(api: &A, session: &mut SessionModel) -> ControllerResult<User>
where
    A: AccountApi + ?Sized,
{
    info!("Loading profile");

    let outcome = api.get_profile(session.token()).await;
    match outcome {
        Ok(user) => {
            session.set_user(user.clone());
            ControllerResult::with_data(user)
        }
        Err(e) => ControllerResult::from_api_error(&e, "Failed to load profile"),
    }
}

/// Validate the profile form, submit it, and store the user the server returns.
///
/// The stored user is the server's representation, not the submitted form.
pub async fn update_profile<A>(
    api: &A,
    session: &mut SessionModel,
    form: ProfileUpdateForm,
) -> ControllerResult<User>
where
    A: AccountApi + ?Sized,
{
    let mut validator = FormValidator::new();
    validator
        .check("fullName", validate_name(&form.full_name))
        .check("email", validate_email(&form.email))
        .check("phone", validate_phone(form.phone.as_deref()))
        .check("address", validate_address(form.address.as_deref()));
    if let Err(errors) = validator.finish() {
        return ControllerResult::invalid(errors);
    }

    info!("Updating profile for user: {}", form.email);

    let update = ProfileUpdate {
        full_name: form.full_name,
        email: form.email,
        phone: form.phone,
        address: form.address,
    };

    let outcome = api.update_profile(session.token(), &update).await;
    match outcome {
        Ok(user) => {
            session.set_user(user.clone());
            ControllerResult::with_data(user)
        }
        Err(e) => ControllerResult::from_api_error(&e, "Failed to update profile"),
    }
}

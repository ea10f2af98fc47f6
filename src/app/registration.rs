use crate::error::{ErrorKind, Result};
use crate::interface::RequestApi;
use crate::model::dtos::RegistrationParams;

use super::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationKind {
    Signup,
    Unregister,
}

impl RegistrationKind {
    pub fn login_required_message(self) -> &'static str {
        match self {
            Self::Signup => "Please log in as a teacher to register students",
            Self::Unregister => "Please log in as a teacher to unregister students",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Signup => "Signup failed",
            Self::Unregister => "Unregistration failed",
        }
    }
}

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";

/// The signup form: student email plus the selected activity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub email: String,
    pub activity: String,
}

impl RegistrationForm {
    pub fn new(email: impl Into<String>, activity: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            activity: activity.into(),
        }
    }
}

/// Checks the local preconditions and sends the request. Returns the
/// server's success message.
///
/// Logged out fails with `NotAuthenticated`, a blank field with
/// `MissingFields`; neither reaches the network. Capacity, duplicates and
/// email format are left to the server.
pub async fn submit<A: RequestApi>(
    api: &A,
    session: &Session,
    kind: RegistrationKind,
    form: &RegistrationForm,
) -> Result<String> {
    let token = match session {
        Session::LoggedIn { token, .. } => token,
        _ => return Err(ErrorKind::NotAuthenticated.into()),
    };
    if form.email.is_empty() || form.activity.is_empty() {
        return Err(ErrorKind::MissingFields.into());
    }

    let params = RegistrationParams {
        token: token.clone(),
        activity: form.activity.clone(),
        email: form.email.clone(),
    };
    log::debug!("{kind:?} {} for {}", params.email, params.activity);
    let resp = match kind {
        RegistrationKind::Signup => api.signup(params).await?,
        RegistrationKind::Unregister => api.unregister(params).await?,
    };
    Ok(resp.message)
}

/// User-facing text for a failed [`submit`].
pub fn failure_text(kind: RegistrationKind, error: &crate::error::Error) -> String {
    match error.kind() {
        ErrorKind::NotAuthenticated => kind.login_required_message().to_string(),
        ErrorKind::MissingFields => MISSING_FIELDS_MESSAGE.to_string(),
        _ => error.user_message(kind.failure_message()),
    }
}

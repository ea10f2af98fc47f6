#![allow(async_fn_in_trait)] // the app drives these futures in place, never across threads

use crate::error::Result;
use crate::model::dtos::{
    LoginParams, LoginResponse, MessageResponse, RegistrationParams, VerifyAuthResponse,
};
use crate::model::structs::ActivityDirectory;

/// Common trait for HTTP client functionality
pub trait HttpClient {
    /// Create a new HTTP client talking to `base_url`
    async fn new(base_url: url::Url) -> Result<Self>
    where
        Self: Sized;
}

/// Every endpoint the signup page talks to.
///
/// Non-success responses come back as `ErrorKind::ServerError` carrying the
/// server's `detail`; transport failures as the backend's network error.
pub trait RequestApi {
    /// Check a bearer token against `GET /verify-auth`
    async fn verify_auth(&self, token: &str) -> Result<VerifyAuthResponse>;

    /// Exchange credentials for a bearer token
    async fn login(&self, params: LoginParams) -> Result<LoginResponse>;

    /// Fetch the full activity directory (no auth)
    async fn get_activities(&self) -> Result<ActivityDirectory>;

    /// Register a student email for an activity
    async fn signup(&self, params: RegistrationParams) -> Result<MessageResponse>;

    /// Remove a student email from an activity
    async fn unregister(&self, params: RegistrationParams) -> Result<MessageResponse>;
}

impl<T: RequestApi> RequestApi for &T {
    async fn verify_auth(&self, token: &str) -> Result<VerifyAuthResponse> {
        (**self).verify_auth(token).await
    }

    async fn login(&self, params: LoginParams) -> Result<LoginResponse> {
        (**self).login(params).await
    }

    async fn get_activities(&self) -> Result<ActivityDirectory> {
        (**self).get_activities().await
    }

    async fn signup(&self, params: RegistrationParams) -> Result<MessageResponse> {
        (**self).signup(params).await
    }

    async fn unregister(&self, params: RegistrationParams) -> Result<MessageResponse> {
        (**self).unregister(params).await
    }
}

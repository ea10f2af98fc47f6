//! WASM HTTP client implementation using gloo_net
//!
//! This module provides HTTP functionality for WASM environments
//! using the gloo_net crate for making HTTP requests via the browser's fetch API.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use super::{bearer, decode_response, endpoint, registration_endpoint};
use crate::error::Result;
use crate::interface::{HttpClient, RequestApi};
use crate::model::dtos::{
    LoginParams, LoginResponse, MessageResponse, RegistrationParams, VerifyAuthResponse,
};
use crate::model::structs::ActivityDirectory;

/// HTTP client for WASM environments using gloo_net
#[derive(Debug, Clone)]
pub struct WasmClient {
    base_url: Url,
}

impl HttpClient for WasmClient {
    async fn new(base_url: Url) -> Result<Self> {
        Ok(Self { base_url })
    }
}

impl WasmClient {
    /// Origin of the page the bundle was served from, so requests stay same-origin.
    pub fn from_window() -> Result<Self> {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .ok_or_else(|| {
                crate::error::ErrorKind::ParseError("window origin unavailable".to_string())
            })?;
        Ok(Self {
            base_url: Url::parse(&origin)?,
        })
    }

    /// Build a request with common headers and settings
    fn build_request(builder: RequestBuilder) -> RequestBuilder {
        builder.header("Accept", "application/json")
    }

    /// Handle JSON response with error checking
    async fn handle_json_response<T: DeserializeOwned>(resp: Response) -> Result<T> {
        let status = resp.status();
        log::debug!("{} -> {}", resp.url(), status);
        let text = resp.text().await?;
        decode_response(status, &text)
    }
}

impl RequestApi for WasmClient {
    async fn verify_auth(&self, token: &str) -> Result<VerifyAuthResponse> {
        let url = endpoint(&self.base_url, &["verify-auth"])?;
        let resp = Self::build_request(Request::get(url.as_str()))
            .header("Authorization", &bearer(token))
            .send()
            .await?;
        Self::handle_json_response(resp).await
    }

    async fn login(&self, params: LoginParams) -> Result<LoginResponse> {
        let url = endpoint(&self.base_url, &["login"])?;
        let resp = Self::build_request(Request::post(url.as_str()))
            .json(&params)?
            .send()
            .await?;
        Self::handle_json_response(resp).await
    }

    async fn get_activities(&self) -> Result<ActivityDirectory> {
        let url = endpoint(&self.base_url, &["activities"])?;
        let resp = Self::build_request(Request::get(url.as_str()))
            .send()
            .await?;
        Self::handle_json_response(resp).await
    }

    async fn signup(&self, params: RegistrationParams) -> Result<MessageResponse> {
        let url = registration_endpoint(&self.base_url, &params.activity, "signup", &params.email)?;
        let resp = Self::build_request(Request::post(url.as_str()))
            .header("Authorization", &bearer(&params.token))
            .send()
            .await?;
        Self::handle_json_response(resp).await
    }

    async fn unregister(&self, params: RegistrationParams) -> Result<MessageResponse> {
        let url =
            registration_endpoint(&self.base_url, &params.activity, "unregister", &params.email)?;
        let resp = Self::build_request(Request::delete(url.as_str()))
            .header("Authorization", &bearer(&params.token))
            .send()
            .await?;
        Self::handle_json_response(resp).await
    }
}

//! No-WASM HTTP client implementation using reqwest
//!
//! This module provides HTTP functionality for non-WASM environments
//! using the reqwest crate for making HTTP requests.

use reqwest::{Client, RequestBuilder, header::AUTHORIZATION};
use serde::de::DeserializeOwned;
use url::Url;

use super::{bearer, decode_response, endpoint, registration_endpoint};
use crate::error::Result;
use crate::interface::{HttpClient, RequestApi};
use crate::model::dtos::{
    LoginParams, LoginResponse, MessageResponse, RegistrationParams, VerifyAuthResponse,
};
use crate::model::structs::ActivityDirectory;

/// HTTP client for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct NoWasmClient {
    client: Client,
    base_url: Url,
}

impl NoWasmClient {
    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let resp = request.send().await?;
        let status = resp.status();
        log::debug!("{} -> {}", resp.url(), status);
        let body = resp.text().await?;
        decode_response(status.as_u16(), &body)
    }
}

impl HttpClient for NoWasmClient {
    async fn new(base_url: Url) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self { client, base_url })
    }
}

impl RequestApi for NoWasmClient {
    async fn verify_auth(&self, token: &str) -> Result<VerifyAuthResponse> {
        let url = endpoint(&self.base_url, &["verify-auth"])?;
        self.send(self.client.get(url).header(AUTHORIZATION, bearer(token)))
            .await
    }

    async fn login(&self, params: LoginParams) -> Result<LoginResponse> {
        let url = endpoint(&self.base_url, &["login"])?;
        self.send(self.client.post(url).json(&params)).await
    }

    async fn get_activities(&self) -> Result<ActivityDirectory> {
        let url = endpoint(&self.base_url, &["activities"])?;
        self.send(self.client.get(url)).await
    }

    async fn signup(&self, params: RegistrationParams) -> Result<MessageResponse> {
        let url = registration_endpoint(&self.base_url, &params.activity, "signup", &params.email)?;
        self.send(
            self.client
                .post(url)
                .header(AUTHORIZATION, bearer(&params.token)),
        )
        .await
    }

    async fn unregister(&self, params: RegistrationParams) -> Result<MessageResponse> {
        let url =
            registration_endpoint(&self.base_url, &params.activity, "unregister", &params.email)?;
        self.send(
            self.client
                .delete(url)
                .header(AUTHORIZATION, bearer(&params.token)),
        )
        .await
    }
}

pub async fn create_client(base_url: Url) -> Result<NoWasmClient> {
    NoWasmClient::new(base_url).await
}

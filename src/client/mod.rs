//! HTTP backends for both WASM and no-WASM environments
//!
//! `request` uses reqwest, `gloo` uses the browser's fetch API via gloo_net.
//! Both share URL construction and response decoding from this module.

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{ErrorKind, Result};
use crate::model::dtos::ErrorBody;

#[cfg(feature = "no-wasm")]
pub mod request;

#[cfg(feature = "wasm")]
pub mod gloo;

/// Appends percent-encoded path segments to the base URL.
pub fn endpoint(base_url: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| ErrorKind::ParseError(format!("{base_url} cannot be used as a base URL")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Registration endpoint with the email as a query parameter.
pub fn registration_endpoint(
    base_url: &Url,
    activity: &str,
    action: &str,
    email: &str,
) -> Result<Url> {
    let mut url = endpoint(base_url, &["activities", activity, action])?;
    url.query_pairs_mut().append_pair("email", email);
    Ok(url)
}

/// Turns a status code and body text into the expected payload, or into a
/// `ServerError` carrying the server's `detail` for non-success statuses.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    if (200..300).contains(&status) {
        return Ok(serde_json::from_str(body)?);
    }
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::detail_text);
    Err(ErrorKind::ServerError { status, detail }.into())
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

use std::path::PathBuf;

use url::Url;

use crate::error::{ErrorKind, Result};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000/";
pub const DEFAULT_SESSION_FILE: &str = ".signup_session.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root of the signup API; always ends with `/`.
    pub base_url: Url,
    /// Where the native build keeps the `authToken` slot.
    pub session_file: PathBuf,
}

impl ClientConfig {
    pub fn new(server: &str, session_file: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(server)?,
            session_file: session_file.into(),
        })
    }
}

/// Parses an http(s) URL and makes sure relative joins stay under its path.
pub fn parse_base_url(server: &str) -> Result<Url> {
    let mut url = Url::parse(server.trim())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ErrorKind::ParseError(format!(
            "unsupported scheme '{}' in server URL",
            url.scheme()
        ))
        .into());
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

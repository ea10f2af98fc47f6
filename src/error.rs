pub type Result<T> = core::result::Result<T, Error>;

/// Shown for any failure where the request never produced a response.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

pub struct Error {
    pub inner: Box<ErrorKind>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Error {
        Error {
            inner: Box::new(kind),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.inner
    }

    /// True when the request never got a response from the server.
    pub fn is_network(&self) -> bool {
        match *self.inner {
            #[cfg(feature = "no-wasm")]
            ErrorKind::ReqwestError(_) => true,
            #[cfg(feature = "wasm")]
            ErrorKind::GlooNetError(_) => true,
            _ => false,
        }
    }

    /// The `detail` text the server attached to a non-success response.
    pub fn server_detail(&self) -> Option<&str> {
        match *self.inner {
            ErrorKind::ServerError { ref detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Text to show the user for a failed operation.
    ///
    /// Transport failures get the generic network message, server failures
    /// their `detail` when present, everything else the caller's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        if self.is_network() {
            return NETWORK_ERROR_MESSAGE.to_string();
        }
        self.server_detail().unwrap_or(fallback).to_string()
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self.inner)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl std::error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error::new(kind)
    }
}

#[cfg(feature = "no-wasm")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::new(ErrorKind::ReqwestError(e))
    }
}

#[cfg(feature = "wasm")]
impl From<gloo_net::Error> for Error {
    fn from(e: gloo_net::Error) -> Error {
        Error::new(ErrorKind::GlooNetError(e))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::new(ErrorKind::SerdeJsonError(e))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::new(ErrorKind::StdIoError(e))
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Error {
        Error::new(ErrorKind::UrlError(e))
    }
}

pub enum ErrorKind {
    #[cfg(feature = "no-wasm")]
    ReqwestError(reqwest::Error),
    #[cfg(feature = "wasm")]
    GlooNetError(gloo_net::Error),
    SerdeJsonError(serde_json::Error),
    StdIoError(std::io::Error),
    UrlError(url::ParseError),
    ParseError(String),
    ServerError { status: u16, detail: Option<String> },
    NotAuthenticated,
    MissingFields,
    StorageError(String),
}

impl std::fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            #[cfg(feature = "no-wasm")]
            ErrorKind::ReqwestError(ref e) => write!(f, "ReqwestError: {e:?}"),
            #[cfg(feature = "wasm")]
            ErrorKind::GlooNetError(ref e) => write!(f, "GlooNetError: {e:?}"),
            ErrorKind::SerdeJsonError(ref e) => write!(f, "SerdeJsonError: {e:?}"),
            ErrorKind::StdIoError(ref e) => write!(f, "StdIoError: {e:?}"),
            ErrorKind::UrlError(ref e) => write!(f, "UrlError: {e:?}"),
            ErrorKind::ParseError(ref e) => write!(f, "ParseError: {e:?}"),
            ErrorKind::ServerError { status, ref detail } => {
                write!(f, "ServerError: {status} {detail:?}")
            }
            ErrorKind::NotAuthenticated => write!(f, "NotAuthenticated"),
            ErrorKind::MissingFields => write!(f, "MissingFields"),
            ErrorKind::StorageError(ref e) => write!(f, "StorageError: {e:?}"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            #[cfg(feature = "no-wasm")]
            ErrorKind::ReqwestError(ref e) => write!(f, "request failed: {e}"),
            #[cfg(feature = "wasm")]
            ErrorKind::GlooNetError(ref e) => write!(f, "request failed: {e}"),
            ErrorKind::SerdeJsonError(ref e) => write!(f, "invalid JSON: {e}"),
            ErrorKind::StdIoError(ref e) => write!(f, "I/O error: {e}"),
            ErrorKind::UrlError(ref e) => write!(f, "invalid URL: {e}"),
            ErrorKind::ParseError(ref e) => write!(f, "{e}"),
            ErrorKind::ServerError {
                status,
                detail: Some(ref detail),
            } => write!(f, "server returned {status}: {detail}"),
            ErrorKind::ServerError { status, detail: None } => {
                write!(f, "server returned {status}")
            }
            ErrorKind::NotAuthenticated => write!(f, "not logged in"),
            ErrorKind::MissingFields => write!(f, "required fields are empty"),
            ErrorKind::StorageError(ref e) => write!(f, "session storage: {e}"),
        }
    }
}

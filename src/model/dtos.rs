use serde::{Deserialize, Serialize};

/// Body of `POST /login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginParams {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// `GET /verify-auth`; `teacher` is absent when not authenticated
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyAuthResponse {
    pub authenticated: bool,
    #[serde(default)]
    pub teacher: Option<String>,
}

/// Common parameters for signup and unregister
#[derive(Debug, Clone)]
pub struct RegistrationParams {
    pub token: String,
    pub activity: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body of a non-success response. Validation errors carry a list
/// instead of a string, so the field is kept loose.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn detail_text(self) -> Option<String> {
        match self.detail {
            Some(serde_json::Value::String(text)) => Some(text),
            _ => None,
        }
    }
}

use crate::error::Result;
use crate::interface::RequestApi;
use crate::model::dtos::{LoginParams, VerifyAuthResponse};
use crate::storage::TokenStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    LoggedOut,
    /// Token read from storage but not yet confirmed by the server.
    Unverified { token: String },
    LoggedIn { token: String, teacher: String },
}

impl Session {
    pub fn token(&self) -> Option<&str> {
        match self {
            Session::LoggedOut => None,
            Session::Unverified { token } | Session::LoggedIn { token, .. } => Some(token),
        }
    }

    pub fn teacher_name(&self) -> Option<&str> {
        match self {
            Session::LoggedIn { teacher, .. } => Some(teacher),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::LoggedIn { .. })
    }
}

/// Owns the in-memory session and the durable token slot behind it.
pub struct SessionManager<S> {
    store: S,
    session: Session,
}

impl<S: TokenStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        let session = match store.load() {
            Some(token) => Session::Unverified { token },
            None => Session::LoggedOut,
        };
        Self { store, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Confirms the current token with the server. Anything short of an
    /// explicit `authenticated: true` with a teacher name drops both the
    /// session and the stored token. Without a token no request is made.
    pub async fn validate_session<A: RequestApi>(&mut self, api: &A) -> &Session {
        let Some(token) = self.session.token().map(str::to_string) else {
            self.reset();
            return &self.session;
        };

        match api.verify_auth(&token).await {
            Ok(VerifyAuthResponse {
                authenticated: true,
                teacher: Some(teacher),
            }) => {
                log::info!("Session valid for {teacher}");
                self.session = Session::LoggedIn { token, teacher };
            }
            Ok(_) => {
                log::info!("Token rejected by server");
                self.reset();
            }
            Err(e) => {
                log::warn!("Auth check failed: {e}");
                self.reset();
            }
        }
        &self.session
    }

    /// Exchanges credentials for a token, persists it and re-validates.
    ///
    /// Only the login call itself can fail. If the server then refuses the
    /// token it just issued, validation leaves the session logged out and
    /// this still returns `Ok`.
    pub async fn login<A: RequestApi>(
        &mut self,
        api: &A,
        username: &str,
        password: &str,
    ) -> Result<&Session> {
        let resp = api
            .login(LoginParams {
                username: username.to_string(),
                password: password.to_string(),
            })
            .await?;

        if let Err(e) = self.store.save(&resp.access_token) {
            log::warn!("Could not persist token, session will not survive restart: {e}");
        }
        self.session = Session::Unverified {
            token: resp.access_token,
        };

        Ok(self.validate_session(api).await)
    }

    pub fn logout(&mut self) {
        log::info!("Logging out");
        self.reset();
    }

    fn reset(&mut self) {
        if let Err(e) = self.store.clear() {
            log::warn!("Failed to clear stored token: {e}");
        }
        self.session = Session::LoggedOut;
    }
}

//! Application module - handles core application logic
//!
//! [`App`] is the page controller: it owns the session, the directory
//! snapshot and the notification slot, and drives a [`View`] through every
//! user action. Each operation runs to completion before the next one starts.

pub mod directory;
pub mod notify;
pub mod registration;
pub mod session;
pub mod view;

pub use directory::{ActivityCard, ActivityDirectoryView, LoadOutcome, SelectOption};
pub use notify::{Notification, NotificationKind, Notifier};
pub use registration::{RegistrationForm, RegistrationKind};
pub use session::{Session, SessionManager};
pub use view::{AuthBanner, View};

use crate::interface::RequestApi;
use crate::model::structs::ActivityDirectory;
use crate::storage::TokenStore;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Successfully logged in!";
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const LOGOUT_MESSAGE: &str = "Logged out successfully";
pub const LOAD_FAILED_MESSAGE: &str = "Error loading activities";

pub struct App<A, S, V> {
    api: A,
    session: SessionManager<S>,
    directory: ActivityDirectoryView,
    notifier: Notifier,
    view: V,
}

impl<A, S, V> App<A, S, V>
where
    A: RequestApi,
    S: TokenStore,
    V: View,
{
    pub fn new(api: A, store: S, view: V) -> Self {
        Self::with_notifier(api, store, view, Notifier::default())
    }

    pub fn with_notifier(api: A, store: S, view: V, notifier: Notifier) -> Self {
        Self {
            api,
            session: SessionManager::new(store),
            directory: ActivityDirectoryView::new(),
            notifier,
            view,
        }
    }

    /// Page load: check the stored session, then fetch the directory.
    pub async fn start(&mut self) {
        self.validate_session().await;
        self.load_activities().await;
    }

    pub async fn validate_session(&mut self) {
        let session = self.session.validate_session(&self.api).await;
        self.view.update_auth(&AuthBanner::for_session(session));
    }

    /// Returns whether the server accepted the credentials. The prompt then
    /// closes even if the fresh token fails validation, which leaves the
    /// session logged out. On failure the prompt stays open with the error
    /// shown in it.
    pub async fn login(&mut self, username: &str, password: &str) -> bool {
        let result = self
            .session
            .login(&self.api, username, password)
            .await
            .map(|_| ());
        self.view
            .update_auth(&AuthBanner::for_session(self.session.session()));

        match result {
            Ok(()) => {
                self.view.close_login_prompt();
                self.notify(Notification::success(LOGIN_SUCCESS_MESSAGE));
                true
            }
            Err(e) => {
                log::warn!("Login failed: {e}");
                self.view.show_login_error(&e.user_message(LOGIN_FAILED_MESSAGE));
                false
            }
        }
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.view
            .update_auth(&AuthBanner::for_session(self.session.session()));
        self.notify(Notification::success(LOGOUT_MESSAGE));
    }

    pub async fn load_activities(&mut self) {
        match self.directory.load(&self.api).await {
            Ok(LoadOutcome::Applied) => {
                if let Some(snapshot) = self.directory.snapshot() {
                    self.view.render_activities(&directory::render(snapshot));
                    self.view
                        .populate_selector(&directory::populate_selector(snapshot));
                }
            }
            Ok(LoadOutcome::Stale) => {}
            Err(e) => {
                log::error!("Error loading activities: {e}");
                self.notify(Notification::error(LOAD_FAILED_MESSAGE));
            }
        }
    }

    pub async fn signup(&mut self, form: &RegistrationForm) -> bool {
        self.register(RegistrationKind::Signup, form).await
    }

    pub async fn unregister(&mut self, form: &RegistrationForm) -> bool {
        self.register(RegistrationKind::Unregister, form).await
    }

    async fn register(&mut self, kind: RegistrationKind, form: &RegistrationForm) -> bool {
        let result =
            registration::submit(&self.api, self.session.session(), kind, form).await;
        match result {
            Ok(message) => {
                self.notify(Notification::success(message));
                self.view.reset_signup_form();
                self.load_activities().await;
                true
            }
            Err(e) => {
                self.notify(Notification::error(registration::failure_text(kind, &e)));
                false
            }
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        self.view.show_notification(&notification);
        self.notifier.notify(notification);
    }

    pub fn session(&self) -> &Session {
        self.session.session()
    }

    pub fn directory(&self) -> Option<&ActivityDirectory> {
        self.directory.snapshot()
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        self.session.store()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

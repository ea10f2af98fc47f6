use super::directory::{ActivityCard, SelectOption};
use super::notify::Notification;
use super::session::Session;

pub const AUTH_WARNING: &str = "Teachers must log in to register or unregister students.";

/// Presentation seam. Front ends own their widgets and redraw from the
/// values handed to them here.
///
/// `show_notification` is only ever told about new messages. Hiding one
/// after its timeout goes through the [`Notifier`](super::Notifier) passed to
/// [`App::with_notifier`](super::App::with_notifier): install a hook with
/// `Notifier::on_dismiss` or poll `Notifier::current`.
pub trait View {
    fn update_auth(&mut self, banner: &AuthBanner);
    fn render_activities(&mut self, cards: &[ActivityCard]);
    fn populate_selector(&mut self, options: &[SelectOption]);
    fn show_notification(&mut self, notification: &Notification);
    fn show_login_error(&mut self, text: &str);
    fn close_login_prompt(&mut self) {}
    fn reset_signup_form(&mut self) {}
}

/// What the header shows for a given session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthBanner {
    pub welcome: Option<String>,
    pub show_login: bool,
    pub show_warning: bool,
    pub actions_enabled: bool,
}

impl AuthBanner {
    pub fn for_session(session: &Session) -> Self {
        match session.teacher_name() {
            Some(teacher) if session.is_authenticated() => Self {
                welcome: Some(format!("Welcome, {teacher}")),
                show_login: false,
                show_warning: false,
                actions_enabled: true,
            },
            _ => Self {
                welcome: None,
                show_login: true,
                show_warning: true,
                actions_enabled: false,
            },
        }
    }
}

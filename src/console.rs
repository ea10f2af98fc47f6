//! Terminal front end: prints whatever the app asks the page to show.

use crate::app::directory::{ActivityCard, SelectOption};
use crate::app::notify::{Notification, NotificationKind};
use crate::app::view::{AUTH_WARNING, AuthBanner, View};

#[derive(Debug, Default)]
pub struct ConsoleView {
    /// Print directory updates as they arrive. Off for commands that only
    /// care about their own outcome.
    pub echo_directory: bool,
    banner: Option<AuthBanner>,
    cards: Vec<ActivityCard>,
    options: Vec<SelectOption>,
    last_notification: Option<Notification>,
    login_error: Option<String>,
}

impl ConsoleView {
    pub fn new(echo_directory: bool) -> Self {
        Self {
            echo_directory,
            ..Self::default()
        }
    }

    pub fn last_notification(&self) -> Option<&Notification> {
        self.last_notification.as_ref()
    }

    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    pub fn print_banner(&self) {
        match &self.banner {
            Some(AuthBanner {
                welcome: Some(welcome),
                ..
            }) => println!("{welcome}"),
            _ => println!("Not logged in. {AUTH_WARNING}"),
        }
    }

    pub fn print_activities(&self) {
        println!("==================Activities==================");
        for card in &self.cards {
            println!("{card}");
            println!("----------------------------------------------");
        }
    }

    pub fn print_selector(&self) {
        for option in self.options.iter().filter(|o| !o.value.is_empty()) {
            println!("{}", option.label);
        }
    }
}

impl View for ConsoleView {
    fn update_auth(&mut self, banner: &AuthBanner) {
        self.banner = Some(banner.clone());
    }

    fn render_activities(&mut self, cards: &[ActivityCard]) {
        self.cards = cards.to_vec();
        if self.echo_directory {
            self.print_activities();
        }
    }

    fn populate_selector(&mut self, options: &[SelectOption]) {
        self.options = options.to_vec();
    }

    fn show_notification(&mut self, notification: &Notification) {
        match notification.kind {
            NotificationKind::Success => println!("[ok] {}", notification.text),
            NotificationKind::Error => eprintln!("[error] {}", notification.text),
        }
        self.last_notification = Some(notification.clone());
    }

    fn show_login_error(&mut self, text: &str) {
        eprintln!("[error] {text}");
        self.login_error = Some(text.to_string());
    }

    fn close_login_prompt(&mut self) {
        self.login_error = None;
    }
}

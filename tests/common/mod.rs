// Shared doubles for the integration tests. Not every test file uses every
// helper.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use activity_signup_core::app::{ActivityCard, AuthBanner, Notification, SelectOption, View};
use activity_signup_core::error::{Error, ErrorKind, Result};
use activity_signup_core::interface::RequestApi;
use activity_signup_core::model::dtos::{
    LoginParams, LoginResponse, MessageResponse, RegistrationParams, VerifyAuthResponse,
};
use activity_signup_core::model::structs::{Activity, ActivityDetails, ActivityDirectory};

/// In-memory stand-in for the signup server, answering the way the real one
/// does and counting every request it receives.
pub struct FakeServer {
    teachers: HashMap<String, String>,
    tokens: RefCell<HashMap<String, String>>,
    activities: RefCell<Vec<(String, ActivityDetails)>>,
    calls: RefCell<Vec<&'static str>>,
    issued: Cell<u32>,
    pub offline: Cell<bool>,
    pub activities_broken: Cell<bool>,
    /// Issue tokens that `/verify-auth` does not recognize.
    pub forget_tokens: Cell<bool>,
}

impl FakeServer {
    pub fn new() -> Self {
        let activities = vec![
            details(
                "Chess Club",
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
            details(
                "Programming Class",
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
            details(
                "Math Club",
                "Solve challenging problems and participate in math competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
                &[],
            ),
        ];
        Self {
            teachers: HashMap::from([("admin".to_string(), "school123".to_string())]),
            tokens: RefCell::new(HashMap::new()),
            activities: RefCell::new(activities),
            calls: RefCell::new(Vec::new()),
            issued: Cell::new(0),
            offline: Cell::new(false),
            activities_broken: Cell::new(false),
            forget_tokens: Cell::new(false),
        }
    }

    /// Registers a token as if a teacher had logged in earlier.
    pub fn with_session(self, token: &str, teacher: &str) -> Self {
        self.tokens
            .borrow_mut()
            .insert(token.to_string(), teacher.to_string());
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn participants(&self, activity: &str) -> Vec<String> {
        self.activities
            .borrow()
            .iter()
            .find(|(name, _)| name == activity)
            .map(|(_, d)| d.participants.clone())
            .unwrap_or_default()
    }

    async fn enter(&self, call: &'static str) -> Result<()> {
        self.calls.borrow_mut().push(call);
        if self.offline.get() {
            return Err(network_error().await);
        }
        Ok(())
    }

    fn teacher_for(&self, token: &str) -> Result<String> {
        self.tokens.borrow().get(token).cloned().ok_or_else(|| {
            server_error(401, "Teacher authentication required")
        })
    }
}

fn details(
    name: &str,
    description: &str,
    schedule: &str,
    max: u32,
    participants: &[&str],
) -> (String, ActivityDetails) {
    (
        name.to_string(),
        ActivityDetails {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        },
    )
}

pub fn server_error(status: u16, detail: &str) -> Error {
    ErrorKind::ServerError {
        status,
        detail: Some(detail.to_string()),
    }
    .into()
}

/// A genuine transport error: reqwest refuses the scheme before any I/O.
pub async fn network_error() -> Error {
    reqwest::Client::new()
        .get("unknown://school.example/")
        .send()
        .await
        .expect_err("unknown scheme cannot be sent")
        .into()
}

impl RequestApi for FakeServer {
    async fn verify_auth(&self, token: &str) -> Result<VerifyAuthResponse> {
        self.enter("verify-auth").await?;
        let teacher = self.tokens.borrow().get(token).cloned();
        Ok(VerifyAuthResponse {
            authenticated: teacher.is_some(),
            teacher,
        })
    }

    async fn login(&self, params: LoginParams) -> Result<LoginResponse> {
        self.enter("login").await?;
        if self.teachers.get(&params.username) != Some(&params.password) {
            return Err(server_error(401, "Invalid username or password"));
        }
        self.issued.set(self.issued.get() + 1);
        let token = format!("token-{}-{}", params.username, self.issued.get());
        if !self.forget_tokens.get() {
            self.tokens
                .borrow_mut()
                .insert(token.clone(), params.username.clone());
        }
        Ok(LoginResponse {
            access_token: token,
            token_type: Some("bearer".to_string()),
        })
    }

    async fn get_activities(&self) -> Result<ActivityDirectory> {
        self.enter("activities").await?;
        if self.activities_broken.get() {
            return Err(ErrorKind::ServerError {
                status: 500,
                detail: None,
            }
            .into());
        }
        Ok(ActivityDirectory::new(
            self.activities
                .borrow()
                .iter()
                .map(|(name, d)| Activity::from_details(name.clone(), d.clone()))
                .collect(),
        ))
    }

    async fn signup(&self, params: RegistrationParams) -> Result<MessageResponse> {
        self.enter("signup").await?;
        let teacher = self.teacher_for(&params.token)?;
        let mut activities = self.activities.borrow_mut();
        let (_, activity) = activities
            .iter_mut()
            .find(|(name, _)| *name == params.activity)
            .ok_or_else(|| server_error(404, "Activity not found"))?;
        if activity.participants.contains(&params.email) {
            return Err(server_error(400, "Student is already signed up"));
        }
        activity.participants.push(params.email.clone());
        Ok(MessageResponse {
            message: format!(
                "Teacher {teacher} signed up {} for {}",
                params.email, params.activity
            ),
        })
    }

    async fn unregister(&self, params: RegistrationParams) -> Result<MessageResponse> {
        self.enter("unregister").await?;
        let teacher = self.teacher_for(&params.token)?;
        let mut activities = self.activities.borrow_mut();
        let (_, activity) = activities
            .iter_mut()
            .find(|(name, _)| *name == params.activity)
            .ok_or_else(|| server_error(404, "Activity not found"))?;
        let Some(pos) = activity.participants.iter().position(|p| *p == params.email) else {
            return Err(server_error(400, "Student is not signed up for this activity"));
        };
        activity.participants.remove(pos);
        Ok(MessageResponse {
            message: format!(
                "Teacher {teacher} unregistered {} from {}",
                params.email, params.activity
            ),
        })
    }
}

/// Remembers everything the app asked it to display.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub banner: Option<AuthBanner>,
    pub cards: Vec<ActivityCard>,
    pub options: Vec<SelectOption>,
    pub notifications: Vec<Notification>,
    pub login_errors: Vec<String>,
    pub renders: usize,
    pub prompt_closed: usize,
    pub form_resets: usize,
}

impl RecordingView {
    pub fn last_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    pub fn card(&self, name: &str) -> Option<&ActivityCard> {
        self.cards.iter().find(|c| c.name == name)
    }
}

impl View for RecordingView {
    fn update_auth(&mut self, banner: &AuthBanner) {
        self.banner = Some(banner.clone());
    }

    fn render_activities(&mut self, cards: &[ActivityCard]) {
        self.cards = cards.to_vec();
        self.renders += 1;
    }

    fn populate_selector(&mut self, options: &[SelectOption]) {
        self.options = options.to_vec();
    }

    fn show_notification(&mut self, notification: &Notification) {
        self.notifications.push(notification.clone());
    }

    fn show_login_error(&mut self, text: &str) {
        self.login_errors.push(text.to_string());
    }

    fn close_login_prompt(&mut self) {
        self.prompt_closed += 1;
    }

    fn reset_signup_form(&mut self) {
        self.form_resets += 1;
    }
}

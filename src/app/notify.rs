//! Transient status line shown after every user action.
//!
//! Each `notify` replaces the displayed text and schedules its own dismissal.
//! Dismissals are not tied to the message that scheduled them: an earlier
//! timer firing after a newer message hides that newer message too.
//!
//! Front ends that draw the message themselves learn about a dismissal
//! through [`Notifier::on_dismiss`], or by polling [`Notifier::current`].

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: NotificationKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

#[derive(Debug, Default)]
struct Slot {
    message: Option<Notification>,
    visible: bool,
}

type DismissHook = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct Notifier {
    slot: Arc<Mutex<Slot>>,
    ttl: Duration,
    on_dismiss: Option<DismissHook>,
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("slot", &self.slot)
            .field("ttl", &self.ttl)
            .field("on_dismiss", &self.on_dismiss.is_some())
            .finish()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(NOTIFICATION_TTL)
    }
}

impl Notifier {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            ttl,
            on_dismiss: None,
        }
    }

    /// Runs `hook` after every dismissal, once the slot is hidden.
    pub fn on_dismiss(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_dismiss = Some(Arc::new(hook));
        self
    }

    /// Shows `notification` in place of whatever is displayed and schedules
    /// a dismissal `ttl` from now.
    pub fn notify(&self, notification: Notification) {
        log::debug!("notify {:?}: {}", notification.kind, notification.text);
        {
            let mut slot = lock(&self.slot);
            slot.message = Some(notification);
            slot.visible = true;
        }
        let slot = Arc::clone(&self.slot);
        let hook = self.on_dismiss.clone();
        schedule_dismissal(self.ttl, move || {
            lock(&slot).visible = false;
            if let Some(hook) = hook {
                hook();
            }
        });
    }

    /// The notification currently on screen, if any.
    pub fn current(&self) -> Option<Notification> {
        let slot = lock(&self.slot);
        if slot.visible { slot.message.clone() } else { None }
    }

    /// The last notification set, whether or not it has been dismissed.
    pub fn last(&self) -> Option<Notification> {
        lock(&self.slot).message.clone()
    }
}

// A poisoned slot still holds a usable message.
fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(|e| e.into_inner())
}

#[cfg(feature = "no-wasm")]
fn schedule_dismissal(delay: Duration, dismiss: impl FnOnce() + Send + 'static) {
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            // Counted from the call, not from the task's first poll.
            let deadline = tokio::time::Instant::now() + delay;
            handle.spawn(async move {
                tokio::time::sleep_until(deadline).await;
                dismiss();
            });
        }
        // Outside a runtime there is nothing to drive the timer; the message
        // stays until replaced.
        Err(_) => log::debug!("No runtime, notification will not expire"),
    }
}

#[cfg(all(feature = "wasm", not(feature = "no-wasm")))]
fn schedule_dismissal(delay: Duration, dismiss: impl FnOnce() + Send + 'static) {
    // `setTimeout` is armed here, so the delay runs from the call.
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::callback::Timeout::new(millis, dismiss).forget();
}

#[cfg(not(any(feature = "wasm", feature = "no-wasm")))]
fn schedule_dismissal(_delay: Duration, _dismiss: impl FnOnce() + Send + 'static) {}

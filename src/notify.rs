//! Transient notifications.
//!
//! Controllers report through the [`Notify`] trait and never touch the DOM.
//! [`NotificationCenter`] is the browser implementation: a reactive queue that
//! the `NotificationStack` component renders.

use leptos::prelude::*;
use tracing::warn;

use crate::dom;

/// How long a notification stays on screen.
pub const NOTIFICATION_TIMEOUT_MS: i32 = 5_000;
/// Length of the slide-out animation played before removal.
pub const DISMISS_ANIMATION_MS: i32 = 300;

pub const NOTIFICATION_STYLE_ID: &str = "notification-styles";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification notification-success",
            NotificationKind::Error => "notification notification-error",
            NotificationKind::Warning => "notification notification-warning",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "\u{2713}",
            NotificationKind::Error | NotificationKind::Warning => "!",
        }
    }
}

/// A host able to show a transient message to the user.
pub trait Notify {
    fn notify(&self, message: &str, kind: NotificationKind);

    fn success(&self, message: &str) {
        self.notify(message, NotificationKind::Success);
    }

    fn error(&self, message: &str) {
        self.notify(message, NotificationKind::Error);
    }

    fn warning(&self, message: &str) {
        self.notify(message, NotificationKind::Warning);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    /// Set once dismissal started; the notice is removed after the animation.
    pub leaving: bool,
}

/// Ordered stack of visible notices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeQueue {
    notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeQueue {
    pub fn push(&mut self, message: &str, kind: NotificationKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push(Notice {
            id,
            message: message.to_string(),
            kind,
            leaving: false,
        });
        id
    }

    /// Mark a notice as leaving. Returns false if it is gone or already leaving.
    pub fn begin_dismiss(&mut self, id: u64) -> bool {
        match self.notices.iter_mut().find(|n| n.id == id && !n.leaving) {
            Some(notice) => {
                notice.leaving = true;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

/// Browser notification host shared by every page through context.
#[derive(Debug, Clone, Copy)]
pub struct NotificationCenter {
    queue: RwSignal<NoticeQueue>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NoticeQueue::default()),
        }
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.queue.with(|q| q.notices().to_vec())
    }

    /// Start the slide-out for `id` and drop it once the animation is over.
    pub fn dismiss(&self, id: u64) {
        let started = self.queue.try_update(|q| q.begin_dismiss(id)).unwrap_or(false);
        if !started {
            return;
        }
        let queue = self.queue;
        if let Err(e) = dom::set_timeout(DISMISS_ANIMATION_MS, move || {
            queue.update(|q| q.remove(id));
        }) {
            warn!("Failed to schedule notification removal: {}", e);
            self.queue.update(|q| q.remove(id));
        }
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Notify for NotificationCenter {
    fn notify(&self, message: &str, kind: NotificationKind) {
        if let Err(e) = dom::ensure_stylesheet(NOTIFICATION_STYLE_ID, NOTIFICATION_CSS) {
            warn!("Failed to inject notification styles: {}", e);
        }

        let Some(id) = self.queue.try_update(|q| q.push(message, kind)) else {
            return;
        };

        let center = *self;
        if let Err(e) = dom::set_timeout(NOTIFICATION_TIMEOUT_MS, move || center.dismiss(id)) {
            warn!("Failed to schedule notification dismissal: {}", e);
        }
    }
}

pub const NOTIFICATION_CSS: &str = r#"
.notification-stack {
    position: fixed;
    top: 20px;
    right: 20px;
    display: flex;
    flex-direction: column;
    gap: 10px;
    z-index: 1000;
}

.notification {
    padding: 15px 20px;
    border-radius: 8px;
    color: white;
    display: flex;
    align-items: center;
    gap: 10px;
    max-width: 400px;
    box-shadow: 0 4px 12px rgba(0,0,0,0.15);
    animation: slideIn 0.3s ease;
}

.notification.leaving {
    animation: slideOut 0.3s ease forwards;
}

.notification-success { background: #2a9d8f; }
.notification-error { background: #e63946; }
.notification-warning { background: #e9c46a; color: #333; }

.notification-close {
    background: none;
    border: none;
    color: inherit;
    font-size: 20px;
    cursor: pointer;
    margin-left: auto;
    padding: 0;
    line-height: 1;
}

@keyframes slideIn {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}

@keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(100%); opacity: 0; }
}
"#;

use std::fmt::Display;
use std::sync::atomic::{AtomicU64, Ordering};

use yew::AttrValue;
use yewdux::{Dispatch, Store};

use crate::config::ALERT_DELAY;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// A toast alert. Setting it on the global store shows it.
#[derive(Default, Debug, Clone, PartialEq, Store)]
pub struct Notification {
    pub id: u64,
    pub content: AttrValue,
    pub delay: u32,
    pub type_: NotificationType,
}

impl Notification {
    fn new(content: impl ToString, type_: NotificationType) -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            content: content.to_string().into(),
            delay: ALERT_DELAY,
            type_,
        }
    }

    pub fn success(content: impl ToString) -> Self {
        Self::new(content, NotificationType::Success)
    }

    pub fn danger(content: impl ToString) -> Self {
        Self::new(content, NotificationType::Danger)
    }

    /// `"{prefix}: {err}"` as a danger alert
    pub fn error(prefix: impl Display, err: impl Display) -> Self {
        Self::danger(format!("{}: {}", prefix, err))
    }

    pub fn notify(self) {
        Dispatch::<Notification>::global().set(self);
    }
}

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub enum NotificationType {
    #[default]
    Success,
    Info,
    Warn,
    Danger,
}

impl NotificationType {
    pub fn class(&self) -> &'static str {
        match self {
            NotificationType::Success => "alert-success",
            NotificationType::Info => "alert-info",
            NotificationType::Warn => "alert-warning",
            NotificationType::Danger => "alert-danger",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn error_alert_is_prefixed() {
        let noti = Notification::error("Error loading users", Error::Api("boom".into()));
        assert_eq!(noti.content.as_str(), "Error loading users: boom");
        assert_eq!(noti.type_, NotificationType::Danger);
        assert_eq!(noti.delay, ALERT_DELAY);
    }

    #[test]
    fn every_alert_gets_its_own_id() {
        let a = Notification::success("saved");
        let b = Notification::success("saved");
        assert_ne!(a.id, b.id);
        assert_ne!(a, b);
    }

    #[test]
    fn bootstrap_classes() {
        assert_eq!(NotificationType::Success.class(), "alert-success");
        assert_eq!(NotificationType::Danger.class(), "alert-danger");
        assert_eq!(NotificationType::Warn.class(), "alert-warning");
        assert_eq!(NotificationType::Info.class(), "alert-info");
    }
}

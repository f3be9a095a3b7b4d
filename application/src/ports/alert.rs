//! Port for user-visible alerts.
//!
//! The presentation layer decides how an alert is shown (stderr line, dialog,
//! toast). Raising an alert is synchronous and non-fallible so it never
//! disturbs the flow that reports it.

/// How prominent an alert is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    Info,
    Success,
    Error,
}

/// A titled message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(severity: AlertSeverity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(AlertSeverity::Error, "Error", message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(AlertSeverity::Success, "Success", message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertSeverity::Info, title, message)
    }
}

/// Port for raising alerts.
pub trait AlertNotifier: Send + Sync {
    fn alert(&self, alert: Alert);
}

/// No-op implementation for tests and non-interactive runs.
pub struct NoAlerts;

impl AlertNotifier for NoAlerts {
    fn alert(&self, _alert: Alert) {}
}

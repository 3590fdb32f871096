//! Transient status-line messages ("toasts")

use std::time::{Duration, Instant};

/// How long a toast stays on screen
pub const TOAST_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    shown_at: Instant,
}

impl Toast {
    fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= TOAST_TTL
    }
}

/// Holds the latest toast; a new one replaces the previous
#[derive(Debug, Default)]
pub struct Toasts {
    current: Option<Toast>,
}

impl Toasts {
    pub fn success(&mut self, message: impl Into<String>) {
        self.current = Some(Toast::new(ToastKind::Success, message));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.current = Some(Toast::new(ToastKind::Info, message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.current = Some(Toast::new(ToastKind::Error, message));
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Drop the toast once it has been visible long enough
    pub fn expire(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_toast_wins() {
        let mut toasts = Toasts::default();
        toasts.success("Task created");
        toasts.error("Title required");

        let toast = toasts.current().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "Title required");
    }

    #[test]
    fn test_toast_expires() {
        let mut toasts = Toasts::default();
        toasts.info("Hello");

        toasts.expire(Instant::now());
        assert!(toasts.current().is_some());

        toasts.expire(Instant::now() + TOAST_TTL);
        assert!(toasts.current().is_none());
    }
}

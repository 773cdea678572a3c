//! Transient user notifications.

use crate::domain::TracksideError;

/// A message shown once to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    /// HTTP status when the failure came from the API.
    pub status: Option<u16>,
}

impl Notification {
    #[must_use]
    pub fn from_error(error: &TracksideError) -> Self {
        Self {
            message: error.user_message(),
            status: error.status(),
        }
    }
}

/// Queue of pending notifications, drained by the renderer.
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    pending: Vec<Notification>,
}

impl Toasts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        tracing::debug!(message = %notification.message, status = ?notification.status, "notification");
        self.pending.push(notification);
    }

    /// Records a failure as a notification.
    pub fn push_error(&mut self, error: &TracksideError) {
        tracing::warn!(error = %error, "operation failed");
        self.push(Notification::from_error(error));
    }

    #[must_use]
    pub fn pending(&self) -> &[Notification] {
        &self.pending
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Takes every pending notification, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UNEXPECTED_ERROR_MESSAGE;

    #[test]
    fn non_http_errors_use_generic_message() {
        let mut toasts = Toasts::new();
        toasts.push_error(&TracksideError::Config("bad url".into()));
        let drained = toasts.drain();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].message, UNEXPECTED_ERROR_MESSAGE);
        assert_eq!(drained[0].status, None);
        assert!(toasts.is_empty());
    }
}

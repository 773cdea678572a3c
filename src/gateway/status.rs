//! Mapping from HTTP status codes to the messages shown to the user.

use crate::domain::error::{TracksideError, UNEXPECTED_ERROR_MESSAGE};

/// Returns the user-facing message for a failed response.
///
/// Well-known statuses have fixed texts. Any other status uses the server's
/// `message` field when present.
///
/// # Example
///
/// ```
/// use trackside::gateway::message_for_status;
///
/// assert_eq!(message_for_status(404, Some("no athlete 9")), "The resource was not found.");
/// assert_eq!(message_for_status(409, Some("duplicate name")), "duplicate name");
/// assert_eq!(message_for_status(418, None), "An unexpected error occurred");
/// ```
#[must_use]
pub fn message_for_status(status: u16, server_message: Option<&str>) -> String {
    match status {
        400 => "There was an error in your request. Please try again.".to_string(),
        401 => "Unauthorized access. You do not have permission to view this resource.".to_string(),
        403 => "You do not have access to this resource.".to_string(),
        404 => "The resource was not found.".to_string(),
        s if s >= 500 => "There was an error on the server. Please try again later.".to_string(),
        _ => server_message
            .filter(|m| !m.is_empty())
            .unwrap_or(UNEXPECTED_ERROR_MESSAGE)
            .to_string(),
    }
}

/// Builds the typed error for a non-2xx response.
#[must_use]
pub fn http_error(status: u16, server_message: Option<&str>) -> TracksideError {
    TracksideError::Http {
        status,
        message: message_for_status(status, server_message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_messages_override_the_server() {
        assert_eq!(
            message_for_status(400, Some("name must not be blank")),
            "There was an error in your request. Please try again."
        );
        assert_eq!(
            message_for_status(401, None),
            "Unauthorized access. You do not have permission to view this resource."
        );
        assert_eq!(message_for_status(403, None), "You do not have access to this resource.");
        for status in [500, 502, 503, 599] {
            assert_eq!(
                message_for_status(status, Some("stack trace")),
                "There was an error on the server. Please try again later."
            );
        }
    }

    #[test]
    fn other_statuses_fall_back_to_server_message() {
        assert_eq!(message_for_status(422, Some("age out of range")), "age out of range");
        assert_eq!(message_for_status(422, Some("")), UNEXPECTED_ERROR_MESSAGE);
    }

    #[test]
    fn http_error_carries_status() {
        let err = http_error(404, None);
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.user_message(), "The resource was not found.");
    }
}

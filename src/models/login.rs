//! Login form view model.

use crate::config::text;
use crate::core::error::LoginFailure;

/// Result of a single login attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Server accepted the password; the session flag is stored.
    Accepted,
    /// Server answered with `success: false`.
    Rejected,
    /// No usable answer (transport error or unreadable body), or the
    /// session flag could not be stored.
    ConnectionFailed(LoginFailure),
}

/// Inline error under the password field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginError {
    InvalidPassword,
    ConnectionFailed,
}

impl LoginError {
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidPassword => text::INVALID_PASSWORD,
            Self::ConnectionFailed => text::CONNECTION_FAILED,
        }
    }
}

/// Follow-up the component performs after applying an outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormEffect {
    /// Go to the admin view.
    Navigate,
    /// Put the cursor back into the (now empty) password field.
    Refocus,
    None,
}

/// Login form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub password: String,
    pub error: Option<LoginError>,
    /// A request is in flight.
    pub pending: bool,
}

impl LoginForm {
    /// Mark a submission as started and hand out the password to send.
    pub fn submit(&mut self) -> String {
        self.pending = true;
        self.password.clone()
    }

    /// Apply the server's answer.
    pub fn resolve(&mut self, outcome: LoginOutcome) -> FormEffect {
        self.pending = false;
        match outcome {
            LoginOutcome::Accepted => {
                self.error = None;
                FormEffect::Navigate
            }
            LoginOutcome::Rejected => {
                self.error = Some(LoginError::InvalidPassword);
                self.password.clear();
                FormEffect::Refocus
            }
            LoginOutcome::ConnectionFailed(_) => {
                self.error = Some(LoginError::ConnectionFailed);
                FormEffect::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ApiError;

    fn filled(password: &str) -> LoginForm {
        LoginForm {
            password: password.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_rejected_clears_password_and_shows_error() {
        let mut form = filled("hunter2");
        assert_eq!(form.submit(), "hunter2");
        assert!(form.pending);

        let effect = form.resolve(LoginOutcome::Rejected);
        assert_eq!(effect, FormEffect::Refocus);
        assert_eq!(form.error, Some(LoginError::InvalidPassword));
        assert!(form.password.is_empty());
        assert!(!form.pending);
    }

    #[test]
    fn test_connection_failure_keeps_password() {
        let mut form = filled("hunter2");
        form.submit();
        let effect = form.resolve(LoginOutcome::ConnectionFailed(LoginFailure::Api(
            ApiError::Network("Failed to fetch".to_string()),
        )));
        assert_eq!(effect, FormEffect::None);
        assert_eq!(form.password, "hunter2");
        assert_eq!(
            form.error.map(LoginError::message),
            Some("Server connection failed.")
        );
    }

    #[test]
    fn test_accepted_navigates_and_clears_error() {
        let mut form = filled("right");
        form.error = Some(LoginError::InvalidPassword);
        assert_eq!(form.resolve(LoginOutcome::Accepted), FormEffect::Navigate);
        assert_eq!(form.error, None);
    }
}

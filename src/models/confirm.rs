//! Two-step confirmation for destructive buttons.

/// Delete button state.
///
/// ```text
/// Idle --click--> Armed --click--> (confirm) Idle
///                   \--timeout--> Idle
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfirmGuard {
    #[default]
    Idle,
    /// Waiting for the second click.
    Armed,
}

/// What the owner of the guard has to do after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Start the disarm timer.
    StartTimer,
    /// Cancel the timer and run the destructive action.
    Confirm,
    Nothing,
}

impl ConfirmGuard {
    pub fn is_armed(self) -> bool {
        matches!(self, Self::Armed)
    }

    /// Handle a click and return the next state.
    pub fn click(self) -> (Self, ConfirmAction) {
        match self {
            Self::Idle => (Self::Armed, ConfirmAction::StartTimer),
            Self::Armed => (Self::Idle, ConfirmAction::Confirm),
        }
    }

    /// Handle the disarm timer firing.
    pub fn timeout(self) -> (Self, ConfirmAction) {
        (Self::Idle, ConfirmAction::Nothing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_click_arms() {
        let (state, action) = ConfirmGuard::Idle.click();
        assert_eq!(state, ConfirmGuard::Armed);
        assert_eq!(action, ConfirmAction::StartTimer);
        assert!(state.is_armed());
    }

    #[test]
    fn test_second_click_confirms() {
        let (armed, _) = ConfirmGuard::default().click();
        let (state, action) = armed.click();
        assert_eq!(action, ConfirmAction::Confirm);
        assert_eq!(state, ConfirmGuard::Idle);
    }

    #[test]
    fn test_timeout_disarms() {
        let (armed, _) = ConfirmGuard::Idle.click();
        let (state, action) = armed.timeout();
        assert_eq!(state, ConfirmGuard::Idle);
        assert_eq!(action, ConfirmAction::Nothing);

        // A click after the timeout arms again instead of deleting.
        let (_, action) = state.click();
        assert_eq!(action, ConfirmAction::StartTimer);
    }
}

//! Submission phase machine for the newsletter and notify forms.
//!
//! One instance per form. The machine only tracks phases; the network
//! request and the 3 second revert timer live in the service layer.

/// Where a form is in its submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Ready for input, submit enabled.
    Idle,
    /// Request in flight, submit disabled.
    Submitting,
    /// Success: the form is replaced by a confirmation.
    Confirmed,
    /// Failure: the control shows an error label, still disabled, until
    /// the timed reset returns it to `Idle`.
    Error,
}

/// Per-form state machine.
#[derive(Debug)]
pub struct FormMachine {
    phase: FormPhase,
}

impl FormMachine {
    pub fn new() -> Self {
        Self {
            phase: FormPhase::Idle,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// The submit control is enabled only while idle; this is the only
    /// guard against a second submission while one is in flight.
    pub fn submit_enabled(&self) -> bool {
        self.phase == FormPhase::Idle
    }

    /// Starts a submission. Returns false (and changes nothing) unless the
    /// form is idle.
    pub fn begin_submit(&mut self) -> bool {
        if self.phase != FormPhase::Idle {
            return false;
        }
        self.phase = FormPhase::Submitting;
        true
    }

    /// The endpoint accepted the submission: the form is done for good.
    pub fn resolve_success(&mut self) {
        if self.phase == FormPhase::Submitting {
            self.phase = FormPhase::Confirmed;
        }
    }

    /// The request failed: show the error label until the timed reset.
    pub fn resolve_error(&mut self) {
        if self.phase == FormPhase::Submitting {
            self.phase = FormPhase::Error;
        }
    }

    /// The 3 second error window elapsed: restore the control. The user
    /// must resubmit by hand, there is no automatic retry.
    pub fn reset_after_error(&mut self) {
        if self.phase == FormPhase::Error {
            self.phase = FormPhase::Idle;
        }
    }
}

impl Default for FormMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_ends_confirmed() {
        let mut form = FormMachine::new();
        assert!(form.submit_enabled());
        assert!(form.begin_submit());
        assert!(!form.submit_enabled());
        form.resolve_success();
        assert_eq!(form.phase(), FormPhase::Confirmed);
        // A confirmed form never submits again.
        assert!(!form.begin_submit());
    }

    #[test]
    fn error_path_reverts_to_idle_after_the_reset() {
        let mut form = FormMachine::new();
        form.begin_submit();
        form.resolve_error();
        assert_eq!(form.phase(), FormPhase::Error);
        assert!(!form.submit_enabled());

        form.reset_after_error();
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(form.submit_enabled());
    }

    #[test]
    fn double_submit_is_rejected_while_in_flight() {
        let mut form = FormMachine::new();
        assert!(form.begin_submit());
        assert!(!form.begin_submit());
        assert_eq!(form.phase(), FormPhase::Submitting);
    }

    #[test]
    fn stale_resolutions_are_ignored() {
        let mut form = FormMachine::new();
        // Resolving without a submission in flight changes nothing.
        form.resolve_error();
        form.resolve_success();
        assert_eq!(form.phase(), FormPhase::Idle);

        // A reset only applies to the error phase.
        form.begin_submit();
        form.reset_after_error();
        assert_eq!(form.phase(), FormPhase::Submitting);
    }

    #[test]
    fn user_can_resubmit_after_an_error() {
        let mut form = FormMachine::new();
        form.begin_submit();
        form.resolve_error();
        form.reset_after_error();
        assert!(form.begin_submit());
        form.resolve_success();
        assert_eq!(form.phase(), FormPhase::Confirmed);
    }
}

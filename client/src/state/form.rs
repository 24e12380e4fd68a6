//! Signup form state: field values, per-field errors, success indicator.
//!
//! DESIGN
//! ======
//! Edits re-validate the edited field plus whatever the validation graph
//! declares dependent on it. Submission runs every rule unconditionally so
//! all errors surface at once. An accepted submit schedules one hide of the
//! success indicator on a `OneShotTimer`; `hide_success` is idempotent so
//! overlapping timers from repeated submits agree.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::util::timer::OneShotTimer;
use crate::util::validation::{self, Field, FieldError, FieldValues};
use crate::util::validation_graph::ValidationGraph;

/// Delay before the success indicator hides itself.
pub const SUCCESS_HIDE_DELAY_MS: u32 = 3_000;

pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";

/// Result of a submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupFormState {
    pub values: FieldValues,
    errors: [Option<FieldError>; 4],
    pub success_visible: bool,
    graph: ValidationGraph,
}

impl Default for SignupFormState {
    fn default() -> Self {
        Self {
            values: FieldValues::default(),
            errors: [None; 4],
            success_visible: false,
            graph: ValidationGraph::signup(),
        }
    }
}

impl SignupFormState {
    /// Error currently displayed for `field`.
    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors[field.index()]
    }

    /// Re-check one field, showing or clearing its error. Returns validity.
    pub fn validate(&mut self, field: Field) -> bool {
        let result = validation::check(field, &self.values);
        self.errors[field.index()] = result.err();
        result.is_ok()
    }

    /// Store new text for `field` and run the real-time checks it triggers.
    pub fn set_value(&mut self, field: Field, value: String) {
        self.values.set(field, value);
        for affected in self.graph.affected_by(field, &self.values) {
            self.validate(affected);
        }
    }

    /// Validate all fields. On success shows the indicator and clears every
    /// value; on failure hides the indicator and leaves errors displayed.
    pub fn submit(&mut self) -> SubmitOutcome {
        let mut all_valid = true;
        for field in Field::ALL {
            all_valid &= self.validate(field);
        }
        if all_valid {
            self.success_visible = true;
            self.values.clear();
            SubmitOutcome::Accepted
        } else {
            self.success_visible = false;
            SubmitOutcome::Rejected
        }
    }

    /// Submit, and on acceptance schedule `hide` after
    /// [`SUCCESS_HIDE_DELAY_MS`]. Rejection schedules nothing.
    pub fn submit_with(&mut self, timer: &mut impl OneShotTimer, hide: impl FnOnce() + 'static) -> SubmitOutcome {
        let outcome = self.submit();
        if outcome == SubmitOutcome::Accepted {
            timer.after(SUCCESS_HIDE_DELAY_MS, hide);
        }
        outcome
    }

    pub fn hide_success(&mut self) {
        self.success_visible = false;
    }
}

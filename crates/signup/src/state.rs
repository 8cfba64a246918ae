// File: src/state.rs
// Purpose: Form state holder and its event handlers

use crate::field::Field;
use crate::form::{ErrorSet, FieldSet, Snapshot, TouchedSet};
use crate::validation::validate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No snapshot on display
    Editing,
    /// A validated snapshot is on display
    Submitted,
}

/// What `on_reset` does with the snapshot on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetPolicy {
    /// Leave the last snapshot visible
    #[default]
    KeepSnapshot,
    /// Hide the snapshot and go back to `Editing`
    ClearSnapshot,
}

/// One user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Change { field: Field, value: String },
    Blur(Field),
    Submit,
    Reset,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All rules passed; the new snapshot is on display.
    Accepted(Snapshot),
    /// At least one rule failed; nothing was stored.
    Rejected(ErrorSet),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// State of the single registration form.
///
/// Every mutation goes through one of the `on_*` handlers. The error set is
/// never edited per field: handlers either recompute it from the current
/// values or clear it.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: FieldSet,
    touched: TouchedSet,
    errors: ErrorSet,
    snapshot: Option<Snapshot>,
    submit_count: u32,
    reset_policy: ResetPolicy,
}

impl FormState {
    /// Fresh form with the default reset policy
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reset_policy(reset_policy: ResetPolicy) -> Self {
        Self {
            reset_policy,
            ..Self::default()
        }
    }

    pub fn on_change(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        self.revalidate();
        debug!(%field, errors = self.errors.len(), "field changed");
    }

    pub fn on_blur(&mut self, field: Field) {
        self.touched.touch(field);
        self.revalidate();
        debug!(%field, "field blurred");
    }

    pub fn on_submit(&mut self) -> SubmitOutcome {
        self.submit_count += 1;
        self.revalidate();

        if self.errors.is_empty() {
            let snapshot = Snapshot::take(&self.values);
            self.snapshot = Some(snapshot.clone());
            info!(attempt = self.submit_count, "registration submitted");
            SubmitOutcome::Accepted(snapshot)
        } else {
            self.touched = TouchedSet::all();
            info!(
                attempt = self.submit_count,
                errors = self.errors.len(),
                "registration rejected"
            );
            SubmitOutcome::Rejected(self.errors.clone())
        }
    }

    pub fn on_reset(&mut self) {
        self.values = FieldSet::new();
        self.touched = TouchedSet::new();
        self.errors = ErrorSet::new();
        self.submit_count = 0;
        if self.reset_policy == ResetPolicy::ClearSnapshot {
            self.snapshot = None;
        }
        debug!(policy = ?self.reset_policy, "form reset");
    }

    /// Dispatch an event to its handler. Only `Submit` produces an outcome.
    pub fn apply(&mut self, event: FormEvent) -> Option<SubmitOutcome> {
        match event {
            FormEvent::Change { field, value } => {
                self.on_change(field, value);
                None
            }
            FormEvent::Blur(field) => {
                self.on_blur(field);
                None
            }
            FormEvent::Submit => Some(self.on_submit()),
            FormEvent::Reset => {
                self.on_reset();
                None
            }
        }
    }

    fn revalidate(&mut self) {
        self.errors = validate(&self.values);
    }

    pub fn phase(&self) -> Phase {
        if self.snapshot.is_some() {
            Phase::Submitted
        } else {
            Phase::Editing
        }
    }

    pub fn values(&self) -> &FieldSet {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn touched(&self) -> &TouchedSet {
        &self.touched
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    pub fn reset_policy(&self) -> ResetPolicy {
        self.reset_policy
    }

    /// Values differ from the initial empty form
    pub fn is_dirty(&self) -> bool {
        !self.values.is_empty()
    }

    /// No errors in the last computed error set.
    ///
    /// This reflects the last validation pass, so it is true right after a
    /// reset even though the empty form would not pass a submit.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error for `field`, but only once the field has been touched.
    pub fn visible_error(&self, field: Field) -> Option<String> {
        if self.touched.is_touched(field) {
            self.errors.message(field)
        } else {
            None
        }
    }

    /// Serializable projection of the state
    pub fn view(&self) -> FormView<'_> {
        FormView {
            phase: self.phase(),
            values: &self.values,
            touched: &self.touched,
            errors: &self.errors,
            snapshot: self.snapshot.as_ref(),
            submit_count: self.submit_count,
            dirty: self.is_dirty(),
            valid: self.is_valid(),
        }
    }
}

/// JSON view of a [`FormState`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView<'a> {
    pub phase: Phase,
    pub values: &'a FieldSet,
    pub touched: &'a TouchedSet,
    pub errors: &'a ErrorSet,
    pub snapshot: Option<&'a Snapshot>,
    pub submit_count: u32,
    pub dirty: bool,
    pub valid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = FormState::new();
        assert_eq!(state.phase(), Phase::Editing);
        assert!(state.values().is_empty());
        assert!(state.touched().is_empty());
        assert!(state.errors().is_empty());
        assert!(state.snapshot().is_none());
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_change_recomputes_errors_without_touching() {
        let mut state = FormState::new();
        state.on_change(Field::Username, "bo");

        assert_eq!(state.value(Field::Username), "bo");
        assert!(state.errors().has_error(Field::Username));
        assert!(!state.touched().is_touched(Field::Username));
        assert_eq!(state.visible_error(Field::Username), None);
    }

    #[test]
    fn test_blur_reveals_error() {
        let mut state = FormState::new();
        state.on_change(Field::Username, "bo");
        state.on_blur(Field::Username);

        assert_eq!(
            state.visible_error(Field::Username).as_deref(),
            Some("Username should be of minimum 3 characters length")
        );
        assert_eq!(state.visible_error(Field::Email), None);
    }

    #[test]
    fn test_blur_does_not_change_values() {
        let mut state = FormState::new();
        state.on_change(Field::Email, "a@b.com");
        let before = state.values().clone();

        state.on_blur(Field::Email);
        assert_eq!(state.values(), &before);
    }

    #[test]
    fn test_rejected_submit_touches_everything() {
        let mut state = FormState::new();
        let outcome = state.on_submit();

        assert!(!outcome.is_accepted());
        assert_eq!(state.touched(), &TouchedSet::all());
        assert_eq!(state.phase(), Phase::Editing);
        assert_eq!(state.submit_count(), 1);
        assert_eq!(
            state.visible_error(Field::Email).as_deref(),
            Some("Email is required")
        );
    }

    #[test]
    fn test_apply_dispatches_events() {
        let mut state = FormState::new();
        assert_eq!(
            state.apply(FormEvent::Change {
                field: Field::Username,
                value: "bob12".to_string(),
            }),
            None
        );
        assert_eq!(state.apply(FormEvent::Blur(Field::Username)), None);
        assert!(state.touched().is_touched(Field::Username));

        let outcome = state.apply(FormEvent::Submit);
        assert!(matches!(outcome, Some(SubmitOutcome::Rejected(_))));

        assert_eq!(state.apply(FormEvent::Reset), None);
        assert!(state.values().is_empty());
    }

    #[test]
    fn test_reset_clears_submit_count() {
        let mut state = FormState::new();
        state.on_submit();
        state.on_submit();
        assert_eq!(state.submit_count(), 2);

        state.on_reset();
        assert_eq!(state.submit_count(), 0);
        assert!(state.is_valid());
    }

    #[test]
    fn test_view_serializes() {
        let mut state = FormState::new();
        state.on_change(Field::ConfirmPassword, "x");
        state.on_blur(Field::ConfirmPassword);

        let json = serde_json::to_value(state.view()).unwrap();
        assert_eq!(json["phase"], "editing");
        assert_eq!(json["values"]["confirmPassword"], "x");
        assert_eq!(json["touched"], serde_json::json!(["confirmPassword"]));
        assert_eq!(json["errors"]["confirmPassword"], "Passwords must match");
        assert_eq!(json["snapshot"], serde_json::Value::Null);
        assert_eq!(json["dirty"], true);
        assert_eq!(json["valid"], false);
    }
}

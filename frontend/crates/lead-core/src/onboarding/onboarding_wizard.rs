//! Four-step onboarding form.
//!
//! Moving forward is gated on the current step's required fields; moving
//! back is always allowed. Every transition attempt clears the previous
//! error. Submission is split in two halves so the caller can run the
//! network call in between: `begin_submit` hands out the payload and raises
//! the loading flag, `finish_submit` records the outcome.

use crate::{
    CoreError, DraftField, OnboardingDraft, OnboardingStep, ProfilePayload,
    REQUIRED_FIELDS_MESSAGE, Result as CoreErrorResult,
};

#[derive(Debug, Clone, Default)]
pub struct OnboardingWizard {
    step: OnboardingStep,
    draft: OnboardingDraft,
    error: Option<String>,
    loading: bool,
}

impl OnboardingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn draft(&self) -> &OnboardingDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut OnboardingDraft {
        &mut self.draft
    }

    pub fn set_field<S: Into<String>>(&mut self, field: DraftField, value: S) {
        self.draft.set(field, value);
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Check the required fields of `step` against the current draft.
    pub fn validate_step(&self, step: OnboardingStep) -> CoreErrorResult<()> {
        let complete = DraftField::for_step(step)
            .iter()
            .filter(|field| field.is_required())
            .all(|field| !self.draft.get(*field).trim().is_empty());

        if complete {
            Ok(())
        } else {
            Err(CoreError::validation(REQUIRED_FIELDS_MESSAGE))
        }
    }

    /// Advance one step if the current one validates. Returns whether the
    /// step changed.
    pub fn next(&mut self) -> bool {
        self.error = None;

        if let Err(e) = self.validate_step(self.step) {
            self.error = Some(e.user_message());
            return false;
        }

        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Go back one step without validating. Returns whether the step changed.
    pub fn back(&mut self) -> bool {
        self.error = None;

        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    /// Start a submission from the last step.
    ///
    /// Returns the payload to POST and raises the loading flag. Fails when
    /// called from any other step or while a submission is in flight.
    pub fn begin_submit(&mut self) -> CoreErrorResult<ProfilePayload> {
        if !self.step.is_last() {
            return Err(CoreError::submit_not_ready(self.step.number()));
        }
        if self.loading {
            return Err(CoreError::validation("Profile is already being saved"));
        }

        self.error = None;
        if let Err(e) = self.validate_step(self.step) {
            self.error = Some(e.user_message());
            return Err(e);
        }

        self.loading = true;
        Ok(ProfilePayload::from(&self.draft))
    }

    /// Record the outcome of the submission started by `begin_submit`.
    pub fn finish_submit(&mut self, outcome: Result<(), String>) {
        self.loading = false;
        self.error = outcome.err();
    }
}

use crate::{CoreError, Result as CoreErrorResult};

/// Typed-confirmation gate in front of the user reset action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminResetGate {
    phrase: String,
}

impl AdminResetGate {
    pub fn new<S: Into<String>>(phrase: S) -> Self {
        Self {
            phrase: phrase.into(),
        }
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// The input must match the phrase exactly, case and spacing included.
    pub fn check(&self, input: &str) -> CoreErrorResult<()> {
        if input == self.phrase {
            Ok(())
        } else {
            Err(CoreError::validation(format!(
                "Type \"{}\" exactly to confirm",
                self.phrase
            )))
        }
    }
}

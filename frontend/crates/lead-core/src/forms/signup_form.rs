use crate::forms::{MIN_PASSWORD_LENGTH, is_blank, looks_like_email};
use crate::{CoreError, Result as CoreErrorResult};

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignupForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    pub password: String,
    /// Local check only, never sent
    #[serde(skip)]
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> CoreErrorResult<()> {
        if is_blank(&self.email) || self.password.is_empty() {
            return Err(CoreError::validation("Email and password are required"));
        }
        if !looks_like_email(&self.email) {
            return Err(CoreError::validation("Please enter a valid email address"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(CoreError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }
        if self.password != self.confirm_password {
            return Err(CoreError::validation("Passwords do not match"));
        }
        Ok(())
    }
}

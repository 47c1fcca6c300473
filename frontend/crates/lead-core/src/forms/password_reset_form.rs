use crate::forms::{MIN_PASSWORD_LENGTH, is_blank, looks_like_email};
use crate::{CoreError, Result as CoreErrorResult};

use serde::Serialize;

/// Request a reset link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ForgotPasswordForm {
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn validate(&self) -> CoreErrorResult<()> {
        if !looks_like_email(&self.email) {
            return Err(CoreError::validation("Please enter a valid email address"));
        }
        Ok(())
    }
}

/// Complete a reset with the token from the emailed link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResetPasswordForm {
    pub token: String,
    pub password: String,
    #[serde(skip)]
    pub confirm_password: String,
}

impl ResetPasswordForm {
    pub fn validate(&self) -> CoreErrorResult<()> {
        if is_blank(&self.token) {
            return Err(CoreError::validation(
                "Reset link is invalid or has expired",
            ));
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

use crate::forms::is_blank;
use crate::{CoreError, Result as CoreErrorResult};

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new<E: Into<String>, P: Into<String>>(email: E, password: P) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> CoreErrorResult<()> {
        if is_blank(&self.email) || self.password.is_empty() {
            return Err(CoreError::validation("Email and password are required"));
        }
        Ok(())
    }
}

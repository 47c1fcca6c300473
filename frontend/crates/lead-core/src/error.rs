use crate::ErrorKind;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid onboarding step: {value} {location}")]
    InvalidStep { value: u8, location: ErrorLocation },

    #[error("Cannot submit onboarding from step {step} {location}")]
    SubmitNotReady { step: u8, location: ErrorLocation },

    #[error("Profile was not loaded {location}")]
    ProfileNotLoaded { location: ErrorLocation },
}

impl CoreError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_step(value: u8) -> Self {
        CoreError::InvalidStep {
            value,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn submit_not_ready(step: u8) -> Self {
        CoreError::SubmitNotReady {
            step,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn profile_not_loaded() -> Self {
        CoreError::ProfileNotLoaded {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// All local failures are user-correctable form problems.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }

    /// Message suitable for inline display (no source location).
    pub fn user_message(&self) -> String {
        match self {
            CoreError::Validation { message, .. } => message.clone(),
            CoreError::InvalidStep { value, .. } => format!("Unknown step {value}"),
            CoreError::SubmitNotReady { .. } => crate::REQUIRED_FIELDS_MESSAGE.to_string(),
            CoreError::ProfileNotLoaded { .. } => crate::PROFILE_NOT_LOADED_MESSAGE.to_string(),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;

use crate::SessionError;

use lead_core::ErrorKind;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

const NETWORK_MESSAGE: &str = "Unable to reach the server. Please try again.";
const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";
const NO_TOKEN_MESSAGE: &str = "Please log in to continue.";

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("No session token {location}")]
    NoToken { location: ErrorLocation },

    #[error("Unauthorized {location}")]
    Unauthorized {
        message: Option<String>,
        location: ErrorLocation,
    },

    #[error("HTTP {status}: {message} {location}")]
    Http {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Network error: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unreadable response body: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Session storage error: {source} {location}")]
    Session {
        #[source]
        source: SessionError,
        location: ErrorLocation,
    },
}

impl ClientError {
    #[track_caller]
    pub fn no_token() -> Self {
        ClientError::NoToken {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized(message: Option<String>) -> Self {
        ClientError::Unauthorized {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn http<S: Into<String>>(status: u16, message: S) -> Self {
        ClientError::Http {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Network {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Decode {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Place in the shared failure taxonomy.
    ///
    /// An unreadable body counts as a network failure. Broken session
    /// storage counts as having no token.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::NoToken { .. } | ClientError::Session { .. } => ErrorKind::NoToken,
            ClientError::Unauthorized { .. } => ErrorKind::Unauthorized,
            ClientError::Http { .. } => ErrorKind::Http,
            ClientError::Network { .. } | ClientError::Decode { .. } => ErrorKind::Network,
        }
    }

    /// HTTP status of a backend rejection, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Unauthorized { .. } => Some(401),
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for a banner (no source location).
    pub fn user_message(&self) -> String {
        match self {
            ClientError::NoToken { .. } | ClientError::Session { .. } => {
                NO_TOKEN_MESSAGE.to_string()
            }
            ClientError::Unauthorized { message, .. } => message
                .clone()
                .unwrap_or_else(|| SESSION_EXPIRED_MESSAGE.to_string()),
            ClientError::Http { message, .. } => message.clone(),
            ClientError::Network { .. } | ClientError::Decode { .. } => {
                NETWORK_MESSAGE.to_string()
            }
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<SessionError> for ClientError {
    #[track_caller]
    fn from(source: SessionError) -> Self {
        ClientError::Session {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

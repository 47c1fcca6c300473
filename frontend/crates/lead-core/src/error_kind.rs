use serde::Serialize;

/// Failure taxonomy shared by every view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// No session present
    NoToken,
    /// Session rejected by the backend
    Unauthorized,
    /// Local form check failed
    #[serde(rename = "VALIDATION_ERROR")]
    Validation,
    /// Backend answered with a non-2xx status
    #[serde(rename = "HTTP_ERROR")]
    Http,
    /// Request never completed or the body was unreadable
    #[serde(rename = "NETWORK_ERROR")]
    Network,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoToken => "NO_TOKEN",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Validation => "VALIDATION_ERROR",
            Self::Http => "HTTP_ERROR",
            Self::Network => "NETWORK_ERROR",
        }
    }

    /// `NO_TOKEN` and `UNAUTHORIZED` always end the session and go to login.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::NoToken | Self::Unauthorized)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

use serde::{Deserialize, Serialize};

/// Query string of the link in outreach emails.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnsubscribeQuery {
    pub email: Option<String>,
    pub token: Option<String>,
}

/// Body of `POST /api/unsubscribe`, forwarded as-is once validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnsubscribeRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl UnsubscribeRequest {
    /// Trimmed email, if one was given.
    pub fn email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
    }
}

//! Interpretation of the profile-fetch response.
//!
//! The backend signals "no profile yet" in two shapes:
//! `{"success": true, "profile": null}` and `{"exists": false}`.
//! Both are recognized here and nowhere else.

use crate::Profile;

use serde::Deserialize;

/// Raw body of `GET /api/profile`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileEnvelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub exists: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileLookup {
    /// A profile was returned
    Found(Profile),
    /// The user has not finished onboarding
    NotFound,
    /// The body matched neither shape; callers treat the user as signed in
    Unspecified,
}

impl ProfileLookup {
    pub fn profile(&self) -> Option<&Profile> {
        match self {
            Self::Found(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn into_profile(self) -> Option<Profile> {
        match self {
            Self::Found(profile) => Some(profile),
            _ => None,
        }
    }
}

impl From<ProfileEnvelope> for ProfileLookup {
    fn from(envelope: ProfileEnvelope) -> Self {
        if envelope.exists == Some(false) {
            return ProfileLookup::NotFound;
        }

        match envelope.profile {
            Some(profile) => ProfileLookup::Found(profile),
            None if envelope.success == Some(true) => ProfileLookup::NotFound,
            None => ProfileLookup::Unspecified,
        }
    }
}

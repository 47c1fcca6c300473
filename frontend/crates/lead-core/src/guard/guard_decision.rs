//! Pure transition table of the session guard.

use crate::{ErrorKind, GuardState, ProfileLookup};

/// Terminal state plus whether the stored session must be wiped first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardDecision {
    pub state: GuardState,
    pub clear_session: bool,
}

impl GuardDecision {
    /// No token in storage: go to login without contacting the backend.
    pub fn missing_token() -> Self {
        Self {
            state: GuardState::RedirectLogin,
            clear_session: false,
        }
    }

    /// Decide from the outcome of the profile fetch.
    ///
    /// | outcome | state | clear |
    /// |---|---|---|
    /// | no token | login | no |
    /// | 401 | login | yes |
    /// | network / unreadable body | login | yes |
    /// | no profile | onboarding | no |
    /// | anything else | authorized | no |
    pub fn from_lookup(outcome: Result<&ProfileLookup, ErrorKind>) -> Self {
        match outcome {
            Err(ErrorKind::NoToken) => Self::missing_token(),
            Err(ErrorKind::Unauthorized) | Err(ErrorKind::Network) => Self {
                state: GuardState::RedirectLogin,
                clear_session: true,
            },
            Ok(ProfileLookup::NotFound) => Self {
                state: GuardState::RedirectOnboarding,
                clear_session: false,
            },
            Ok(ProfileLookup::Found(_))
            | Ok(ProfileLookup::Unspecified)
            | Err(ErrorKind::Http)
            | Err(ErrorKind::Validation) => Self {
                state: GuardState::Authorized,
                clear_session: false,
            },
        }
    }
}

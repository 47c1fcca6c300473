use crate::Route;

/// Protected-layout gate. Starts in `Checking`; every other state is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GuardState {
    #[default]
    Checking,
    Authorized,
    RedirectLogin,
    RedirectOnboarding,
}

impl GuardState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Checking)
    }

    /// Protected content may render only once the check has authorized it.
    pub fn may_render(&self) -> bool {
        matches!(self, Self::Authorized)
    }

    /// Where the gate sends the user, if anywhere.
    pub fn redirect(&self) -> Option<Route> {
        match self {
            Self::RedirectLogin => Some(Route::Login),
            Self::RedirectOnboarding => Some(Route::Onboarding),
            Self::Checking | Self::Authorized => None,
        }
    }
}

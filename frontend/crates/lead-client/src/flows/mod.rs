//! View orchestration: one function per user action.
//!
//! Each flow drives a `lead-core` state machine through a backend call and
//! reports where the user ended up. Auth failures go through the
//! [`Dispatcher`](crate::Dispatcher); everything else is returned for the
//! view to show.

pub mod admin;
pub mod auth;
pub mod guard;
pub mod onboarding;
pub mod targeting;
pub mod unsubscribe;

use lead_core::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome<T = ()> {
    /// Finished; the view stays and may use the value
    Done(T),
    /// The user was sent elsewhere; the view's state is stale
    Redirected(Route),
    /// Finished with a message the view now displays
    Failed(String),
}

impl<T> FlowOutcome<T> {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    pub fn redirect(&self) -> Option<Route> {
        match self {
            Self::Redirected(route) => Some(*route),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

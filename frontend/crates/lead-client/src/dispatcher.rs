//! Turns flow results into navigation.

use crate::{ClientError, Navigator, SessionContext};

use lead_core::{GuardDecision, GuardState, Route};

use std::sync::Arc;

use log::{info, warn};

/// Owns the session-ending side effects so that flows stay free of them.
#[derive(Clone)]
pub struct Dispatcher {
    session: SessionContext,
    navigator: Arc<dyn Navigator>,
}

impl Dispatcher {
    pub fn new(session: SessionContext, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn navigate(&self, route: Route) {
        self.navigator.navigate(route);
    }

    /// Handle an auth failure: wipe the session and go to login.
    ///
    /// Returns true when the error was consumed. Any other error is left
    /// for the view to display.
    pub fn intercept(&self, error: &ClientError) -> bool {
        if !error.kind().is_auth_failure() {
            return false;
        }

        warn!("Auth failure ({}), returning to login", error.kind());
        self.session.clear_or_warn();
        self.navigate(Route::Login);
        true
    }

    /// Carry out a guard decision and report the resulting state.
    pub fn apply(&self, decision: GuardDecision) -> GuardState {
        if decision.clear_session {
            self.session.clear_or_warn();
        }

        match decision.state.redirect() {
            Some(route) => self.navigate(route),
            None => info!("Guard: {:?}", decision.state),
        }

        decision.state
    }
}

use crate::{ErrorKind, GuardDecision, GuardState, Profile, ProfileLookup, Route};

use googletest::assert_that;
use googletest::prelude::eq;

fn decide(outcome: Result<&ProfileLookup, ErrorKind>) -> (GuardState, bool) {
    let decision = GuardDecision::from_lookup(outcome);
    (decision.state, decision.clear_session)
}

#[test]
fn given_missing_token_then_login_without_clearing() {
    let decision = GuardDecision::missing_token();

    assert_that!(decision.state, eq(GuardState::RedirectLogin));
    assert!(!decision.clear_session);
    assert_eq!(decide(Err(ErrorKind::NoToken)), (GuardState::RedirectLogin, false));
}

#[test]
fn given_unauthorized_then_login_and_clear() {
    assert_eq!(
        decide(Err(ErrorKind::Unauthorized)),
        (GuardState::RedirectLogin, true)
    );
}

#[test]
fn given_network_failure_then_login_and_clear() {
    assert_eq!(
        decide(Err(ErrorKind::Network)),
        (GuardState::RedirectLogin, true)
    );
}

#[test]
fn given_no_profile_then_onboarding_without_clearing() {
    assert_eq!(
        decide(Ok(&ProfileLookup::NotFound)),
        (GuardState::RedirectOnboarding, false)
    );
}

#[test]
fn given_profile_then_authorized() {
    let lookup = ProfileLookup::Found(Profile::default());
    assert_eq!(decide(Ok(&lookup)), (GuardState::Authorized, false));
}

#[test]
fn given_unspecified_body_then_authorized() {
    assert_eq!(
        decide(Ok(&ProfileLookup::Unspecified)),
        (GuardState::Authorized, false)
    );
}

#[test]
fn given_server_error_then_authorized() {
    assert_eq!(decide(Err(ErrorKind::Http)), (GuardState::Authorized, false));
}

#[test]
fn given_guard_states_then_only_authorized_renders() {
    assert!(!GuardState::Checking.is_terminal());
    assert!(!GuardState::Checking.may_render());
    assert!(GuardState::Authorized.may_render());
    assert!(!GuardState::RedirectOnboarding.may_render());
    assert_eq!(GuardState::RedirectLogin.redirect(), Some(Route::Login));
    assert_eq!(
        GuardState::RedirectOnboarding.redirect(),
        Some(Route::Onboarding)
    );
    assert_eq!(GuardState::Authorized.redirect(), None);
}

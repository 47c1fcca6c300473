use crate::forms::MIN_PASSWORD_LENGTH;
use crate::{LoginForm, ResetPasswordForm, SignupForm};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};

fn valid_signup() -> SignupForm {
    SignupForm {
        name: Some("Jordan".to_string()),
        email: "jordan@acme.test".to_string(),
        password: "hunter2hunter2".to_string(),
        confirm_password: "hunter2hunter2".to_string(),
    }
}

#[test]
fn given_valid_signup_then_ok() {
    assert_that!(valid_signup().validate(), ok(anything()));
}

#[test]
fn given_short_password_then_rejected() {
    let mut form = valid_signup();
    form.password = "a".repeat(MIN_PASSWORD_LENGTH - 1);
    form.confirm_password = form.password.clone();

    assert_that!(form.validate(), err(anything()));
}

#[test]
fn given_mismatched_confirmation_then_rejected() {
    let mut form = valid_signup();
    form.confirm_password = "something-else".to_string();

    let message = form.validate().unwrap_err().user_message();
    assert_eq!(message, "Passwords do not match");
}

#[test]
fn given_malformed_email_then_rejected() {
    let mut form = valid_signup();
    form.email = "jordan".to_string();

    assert_that!(form.validate(), err(anything()));
}

#[test]
fn given_signup_serialized_then_confirmation_not_sent() {
    let json = serde_json::to_value(valid_signup()).unwrap();

    assert_eq!(json["email"], "jordan@acme.test");
    assert!(json.get("confirm_password").is_none());
}

#[test]
fn given_signup_without_name_then_name_omitted() {
    let mut form = valid_signup();
    form.name = None;

    let json = serde_json::to_value(form).unwrap();
    assert!(json.get("name").is_none());
}

#[test]
fn given_login_without_password_then_rejected() {
    assert_that!(LoginForm::new("a@b.co", "").validate(), err(anything()));
    assert_that!(LoginForm::new("a@b.co", "pw").validate(), ok(anything()));
}

#[test]
fn given_reset_without_token_then_rejected() {
    let form = ResetPasswordForm {
        token: " ".to_string(),
        password: "longenough".to_string(),
        confirm_password: "longenough".to_string(),
    };

    assert_that!(form.validate(), err(anything()));
}

pub mod admin_reset_gate;
pub mod login_form;
pub mod password_reset_form;
pub mod signup_form;

/// Minimum password length accepted by signup and reset forms
pub const MIN_PASSWORD_LENGTH: usize = 8;

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub(crate) fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    }
}

use crate::api::{AuthError, SignInData};

/// Shown when the backend rejects the attempt without a usable message.
pub const GENERIC_SIGN_IN_ERROR: &str = "An error occurred during login.";

/// Shown when the backend reports success but omits the user record.
pub const MISSING_USER_ERROR: &str = "Login failed. Please check your credentials.";

pub fn failure_message(error: AuthError) -> String {
    error
        .message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| GENERIC_SIGN_IN_ERROR.to_string())
}

/// A success response only counts as an authentication when it carries a
/// user record; anything else is surfaced as a failure.
pub fn confirm_user(data: SignInData) -> Result<(), String> {
    if data.user.is_some() {
        Ok(())
    } else {
        Err(MISSING_USER_ERROR.to_string())
    }
}

use super::utils;
use crate::api::{AuthClient, SignInRequest};

/// Destination after a confirmed authentication; doubles as the callback URL
/// sent with the sign-in request.
pub const REDIRECT_PATH: &str = crate::router::DASHBOARD_PATH;

/// One sign-in attempt. `Ok(())` means the backend confirmed the user; any
/// other outcome is folded into a user-facing message.
pub async fn sign_in(client: &AuthClient, request: SignInRequest) -> Result<(), String> {
    match client.sign_in_email(request).await {
        Ok(data) => utils::confirm_user(data),
        Err(error) => {
            let message = utils::failure_message(error);
            log::warn!("sign-in attempt failed: {}", message);
            Err(message)
        }
    }
}

pub fn sign_in_request(email: String, password: String) -> SignInRequest {
    SignInRequest {
        email,
        password,
        callback_url: REDIRECT_PATH.to_string(),
    }
}

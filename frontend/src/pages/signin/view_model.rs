use super::repository;
use crate::api::{AuthClient, SignInRequest};
use crate::router::Navigator;
use leptos::*;

/// Action wrapping one sign-in attempt. The framework-managed `pending`
/// signal is the submitting flag: it flips back to false whenever the
/// attempt resolves, success and failure alike, and the owning scope drops
/// late completions once it is disposed.
pub fn use_sign_in_action() -> Action<SignInRequest, Result<(), String>> {
    let client = use_context::<AuthClient>().unwrap_or_else(AuthClient::new);

    create_action(move |request: &SignInRequest| {
        let payload = request.clone();
        let client = client.clone();
        async move { repository::sign_in(&client, payload).await }
    })
}

/// Gate for one submission. A no-op while an attempt is in flight; otherwise
/// clears any previously displayed error and yields the request to dispatch.
pub fn prepare_submit(
    in_flight: bool,
    set_error: WriteSignal<Option<String>>,
    email: String,
    password: String,
) -> Option<SignInRequest> {
    if in_flight {
        return None;
    }
    set_error.set(None);
    Some(repository::sign_in_request(email, password))
}

/// Secondary control: navigates to the registration screen. Disabled while a
/// submission is in flight and never touches the authentication client.
pub fn navigate_to_signup(in_flight: bool, navigator: &Navigator) {
    if !in_flight {
        navigator.push(crate::router::SIGNUP_PATH);
    }
}

/// Applies a resolved attempt to the form: a confirmed sign-in clears the
/// error and navigates to the redirect destination; a failure only sets the
/// inline error.
pub fn apply_sign_in_outcome(
    outcome: &Result<(), String>,
    set_error: WriteSignal<Option<String>>,
    navigator: &Navigator,
) {
    match outcome {
        Ok(()) => {
            set_error.set(None);
            navigator.push(repository::REDIRECT_PATH);
        }
        Err(message) => set_error.set(Some(message.clone())),
    }
}

use super::{components::form::SignInForm, view_model};
use crate::router::use_navigator;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn SignInPanel() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let sign_in_action = view_model::use_sign_in_action();
    let pending = sign_in_action.pending();
    let navigator = use_navigator();

    {
        let navigator = navigator.clone();
        create_effect(move |_| {
            if let Some(result) = sign_in_action.value().get() {
                view_model::apply_sign_in_outcome(&result, set_error, &navigator);
            }
        });
    }

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(request) = view_model::prepare_submit(
            pending.get_untracked(),
            set_error,
            email.get_untracked(),
            password.get_untracked(),
        ) {
            sign_in_action.dispatch(request);
        }
    });

    let handle_signup = {
        let navigator = navigator.clone();
        Callback::new(move |_| {
            view_model::navigate_to_signup(pending.get_untracked(), &navigator);
        })
    };

    let email_input = Callback::new(move |value: String| set_email.set(value));
    let password_input = Callback::new(move |value: String| set_password.set(value));

    view! {
        <SignInForm
            email=email
            password=password
            error=error
            pending=pending.into()
            on_email_input=email_input
            on_password_input=password_input
            on_submit=handle_submit
            on_signup=handle_signup
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::AuthClient;
    use crate::test_support::helpers::recording_navigator;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn panel_renders_idle_form() {
        let html = render_to_string(|| {
            provide_context(AuthClient::new_with_base_url("http://127.0.0.1:1"));
            let (navigator, _) = recording_navigator();
            provide_context(navigator);
            view! { <SignInPanel /> }
        });
        assert!(html.contains("Login"));
        assert!(html.contains("Sign in"));
        assert!(!html.contains("Signing in..."));
    }
}

use crate::api::{AuthClient, SignUpRequest};
use crate::components::{
    cards::{Card, CardContent, CardFooter, CardHeader},
    forms::TextField,
};
use crate::pages::signin::components::messages::InlineErrorMessage;
use crate::pages::signin::{repository::REDIRECT_PATH, utils, view_model};
use crate::router::SIGNIN_PATH;
use leptos::{ev::SubmitEvent, *};

fn use_sign_up_action() -> Action<SignUpRequest, Result<(), String>> {
    let client = use_context::<AuthClient>().unwrap_or_else(AuthClient::new);

    create_action(move |request: &SignUpRequest| {
        let payload = request.clone();
        let client = client.clone();
        async move {
            match client.sign_up_email(payload).await {
                Ok(data) => utils::confirm_user(data),
                Err(error) => Err(utils::failure_message(error)),
            }
        }
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let sign_up_action = use_sign_up_action();
    let pending = sign_up_action.pending();
    let navigator = crate::router::use_navigator();

    {
        let navigator = navigator.clone();
        create_effect(move |_| {
            if let Some(result) = sign_up_action.value().get() {
                view_model::apply_sign_in_outcome(&result, set_error, &navigator);
            }
        });
    }

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        set_error.set(None);
        sign_up_action.dispatch(SignUpRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            callback_url: REDIRECT_PATH.to_string(),
        });
    };

    let handle_signin = {
        let navigator = navigator.clone();
        move |_| {
            if !pending.get_untracked() {
                navigator.push(SIGNIN_PATH);
            }
        }
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <Card>
                <CardHeader
                    title="Create account"
                    description="Enter your details below to register."
                />
                <form on:submit=handle_submit>
                    <CardContent>
                        <TextField
                            id="name"
                            label="Name"
                            value=name
                            on_input=Callback::new(move |value: String| set_name.set(value))
                            disabled=pending
                        />
                        <TextField
                            id="email"
                            label="Email"
                            input_type="email"
                            placeholder="example@example.com"
                            value=email
                            on_input=Callback::new(move |value: String| set_email.set(value))
                            disabled=pending
                        />
                        <TextField
                            id="password"
                            label="Password"
                            input_type="password"
                            value=password
                            on_input=Callback::new(move |value: String| set_password.set(value))
                            disabled=pending
                        />
                        <InlineErrorMessage error=error />
                    </CardContent>
                    <CardFooter>
                        <button
                            type="submit"
                            disabled=pending
                            class="w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500 disabled:opacity-50"
                        >
                            {move || if pending.get() { "Creating account..." } else { "Create account" }}
                        </button>
                        <button
                            type="button"
                            disabled=pending
                            on:click=handle_signin
                            class="text-sm text-blue-600 hover:underline disabled:opacity-50"
                        >
                            "Already have an account? Sign in instead."
                        </button>
                    </CardFooter>
                </form>
            </Card>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::recording_navigator;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn signup_renders_registration_form() {
        let html = render_to_string(|| {
            provide_context(AuthClient::new_with_base_url("http://127.0.0.1:1"));
            let (navigator, _) = recording_navigator();
            provide_context(navigator);
            view! { <SignupPage /> }
        });
        assert!(html.contains("Create account"));
        assert!(html.contains("Name"));
        assert!(html.contains("Sign in instead."));
    }
}

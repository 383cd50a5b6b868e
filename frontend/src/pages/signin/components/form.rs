use crate::components::{
    cards::{Card, CardContent, CardFooter, CardHeader},
    forms::TextField,
};
use crate::pages::signin::components::messages::InlineErrorMessage;
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn SignInForm(
    email: ReadSignal<String>,
    password: ReadSignal<String>,
    error: ReadSignal<Option<String>>,
    pending: Signal<bool>,
    on_email_input: Callback<String>,
    on_password_input: Callback<String>,
    on_submit: Callback<SubmitEvent>,
    on_signup: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <Card>
                <CardHeader
                    title="Login"
                    description="Enter your email below to login to your account."
                />
                <form on:submit=move |ev| on_submit.call(ev)>
                    <CardContent>
                        <TextField
                            id="email"
                            label="Email"
                            input_type="email"
                            placeholder="example@example.com"
                            value=email
                            on_input=on_email_input
                            disabled=pending
                        />
                        <TextField
                            id="password"
                            label="Password"
                            input_type="password"
                            value=password
                            on_input=on_password_input
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
                            {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                        <button
                            type="button"
                            disabled=pending
                            on:click=move |_| on_signup.call(())
                            class="text-sm text-blue-600 hover:underline disabled:opacity-50"
                        >
                            "Don't have an account yet? Click here to register."
                        </button>
                    </CardFooter>
                </form>
            </Card>
        </div>
    }
}

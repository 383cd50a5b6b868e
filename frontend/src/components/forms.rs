use leptos::*;

/// Labeled text input. Disabled state is driven by the caller so a form can
/// freeze its fields while a submission is in flight.
#[component]
pub fn TextField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into, default = String::from("text"))] input_type: String,
    #[prop(optional, into)] placeholder: Option<String>,
    value: ReadSignal<String>,
    on_input: Callback<String>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let input_id = id.clone();
    view! {
        <div class="grid gap-2">
            <label for=id class="text-sm font-medium text-gray-700">{label}</label>
            <input
                id=input_id
                type=input_type
                required
                placeholder=placeholder.unwrap_or_default()
                prop:value=value
                disabled=disabled
                class="appearance-none block w-full px-3 py-2 border border-gray-300 rounded-md placeholder-gray-500 text-gray-900 focus:outline-none focus:ring-blue-500 focus:border-blue-500 sm:text-sm disabled:opacity-50"
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}

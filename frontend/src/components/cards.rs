use leptos::*;

#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! {
        <div class="w-full max-w-sm bg-white overflow-hidden shadow rounded-lg">
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
) -> impl IntoView {
    view! {
        <div class="px-4 py-5 sm:px-6">
            <h2 class="text-2xl font-semibold text-gray-900">{title}</h2>
            <p class="mt-1 text-sm text-gray-600">{description}</p>
        </div>
    }
}

#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! {
        <div class="px-4 py-4 sm:px-6 grid gap-4">
            {children()}
        </div>
    }
}

#[component]
pub fn CardFooter(children: Children) -> impl IntoView {
    view! {
        <div class="px-4 py-4 sm:px-6 flex flex-col gap-2">
            {children()}
        </div>
    }
}

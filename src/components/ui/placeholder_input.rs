use leptos::prelude::*;

#[component]
pub fn PlaceholderInput() -> impl IntoView {
    view! { <>"Hello"</> }
}

use leptos::prelude::*;
use tw_merge::*;

/// Label + control + optional error line, stacked.
///
/// `html_for` should match the id of the wrapped control.
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    #[prop(optional, into)] html_for: String,
    #[prop(optional, into)] error: Signal<Option<String>>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let class = tw_merge!("flex flex-col gap-2", class);

    view! {
        <div data-name="FormField" class=class>
            <label
                class="text-sm leading-none font-medium select-none"
                r#for=html_for
            >
                {label}
            </label>
            {children()}
            <Show when=move || error.with(|e| e.is_some())>
                <p data-name="FormFieldError" class="text-xs text-destructive">
                    {move || error.get().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}

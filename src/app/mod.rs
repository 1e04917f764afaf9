use icons::{Layers, ShieldCheck, Zap};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::ui::{
    Carousel, FormField, FormInput, InputSize, InputType, PlaceholderInput,
};
use crate::models::SlideDescriptor;
use crate::theme::{provide_theme, Theme};
use crate::util::looks_like_email;

fn showcase_slides() -> Vec<SlideDescriptor> {
    vec![
        SlideDescriptor::new(
            "Fast",
            "Renders straight to the DOM from wasm.",
            || view! { <Zap /> },
        ),
        SlideDescriptor::new(
            "Composable",
            "Every widget is a plain component with typed props.",
            || view! { <Layers /> },
        ),
        SlideDescriptor::new(
            "Themeable",
            "Input colours come from window.THEME when present.",
            || view! { <ShieldCheck /> },
        ),
    ]
}

#[component]
pub fn ShowcasePage() -> impl IntoView {
    let email: RwSignal<String> = RwSignal::new(String::new());
    let password: RwSignal<String> = RwSignal::new(String::new());
    let email_error: RwSignal<Option<String>> = RwSignal::new(None);

    let on_email_blur = move |(_, before, _name): (web_sys::FocusEvent, String, String)| {
        let current = email.get_untracked();
        if current == before {
            return;
        }
        if current.trim().is_empty() || looks_like_email(&current) {
            email_error.set(None);
        } else {
            email_error.set(Some("Enter a valid email address.".to_string()));
        }
    };

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto flex w-full max-w-2xl flex-col gap-10 px-4 py-12">
                <Carousel title="Why bridge-ui" items=showcase_slides() />

                <form
                    class="flex flex-col gap-4 rounded-xl border p-6"
                    on:submit=move |ev: web_sys::SubmitEvent| ev.prevent_default()
                >
                    <FormField label="Email" html_for="email" error=email_error>
                        <FormInput
                            id="email"
                            name="email"
                            r#type=InputType::Email
                            placeholder="you@example.com"
                            auto_complete="email"
                            value=email
                            on_change=move |v: String| email.set(v)
                            on_blur=on_email_blur
                            invalid=Signal::derive(move || email_error.with(|e| e.is_some()))
                        />
                    </FormField>

                    <FormField label="Password" html_for="password">
                        <FormInput
                            id="password"
                            name="password"
                            r#type=InputType::Password
                            size=InputSize::Medium
                            auto_complete="current-password"
                            value=password
                            on_change=move |v: String| password.set(v)
                        />
                    </FormField>
                </form>

                <div class="text-xs text-muted-foreground">
                    <PlaceholderInput />
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_theme(Theme::load());

    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - router hooks require a <Router> context.
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Not found"</div> }>
                <Route path=path!("") view=ShowcasePage />
            </Routes>
        </Router>
    }
}

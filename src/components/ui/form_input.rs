use icons::{Eye, EyeOff};
use leptos::html;
use leptos::prelude::*;
use strum::{AsRefStr, Display};
use tw_merge::tw_merge;

use crate::components::hooks::use_next_tick::next_tick;
use crate::components::hooks::use_random::use_random_id_for;
use crate::components::ui::icon_button::{IconButton, IconButtonSize, IconButtonVariant};
use crate::theme::use_theme;

/// Selection bound past any realistic value length. `setSelectionRange`
/// clamps it, which leaves the caret after the last character.
const CARET_END: u32 = u32::MAX;

const BASE_CLASS: &str = "form-input";

/* ========================================================== */
/*                       🧬 ENUMS 🧬                          */
/* ========================================================== */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
    Number,
    Search,
    Email,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum InputSize {
    #[default]
    Large,
    Medium,
    Small,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum InputShape {
    #[default]
    Box,
    Rounded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum AutoCapitalize {
    Off,
    None,
    On,
    Sentences,
    Words,
    Characters,
}

/* ========================================================== */
/*                       🧬 STRUCT 🧬                         */
/* ========================================================== */

/// Transient per-instance state of a [`FormInput`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInputState {
    pub show_password: bool,
    pub value_before_focus: String,
}

impl FormInputState {
    /// Returns the new visibility.
    pub fn toggle_password_visibility(&mut self) -> bool {
        self.show_password = !self.show_password;
        self.show_password
    }

    /// Snapshots `value` and returns the snapshot handed to `on_focus`.
    ///
    /// The snapshot always equals `value`; it exists to keep the
    /// `(event, snapshot)` callback shape.
    pub fn focus(&mut self, value: &str) -> String {
        self.value_before_focus = value.to_string();
        self.value_before_focus.clone()
    }

    /// Takes the pre-focus snapshot, leaving it empty.
    pub fn blur(&mut self) -> String {
        std::mem::take(&mut self.value_before_focus)
    }

    pub fn effective_type(&self, r#type: InputType, password_visibility_icon: bool) -> InputType {
        effective_type(r#type, password_visibility_icon, self.show_password)
    }
}

/// The type actually rendered: a revealed password renders as `text`.
pub fn effective_type(
    r#type: InputType,
    password_visibility_icon: bool,
    show_password: bool,
) -> InputType {
    if r#type == InputType::Password && password_visibility_icon && show_password {
        InputType::Text
    } else {
        r#type
    }
}

/// Semantic class list: base, size, caller class, then the state markers.
pub fn form_input_class(size: InputSize, class: &str, invalid: bool, no_spinner: bool) -> String {
    let mut parts = vec![BASE_CLASS, size.as_ref()];
    if !class.trim().is_empty() {
        parts.push(class.trim());
    }
    if invalid {
        parts.push("error");
    }
    if no_spinner {
        parts.push("no-spinner");
    }
    parts.join(" ")
}

/// Caller-supplied attributes, applied after every computed attribute.
///
/// Insertion ordered; setting a key twice keeps the latest value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrOverrides(Vec<(String, String)>);

impl AttrOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The override for `key` if there is one, else `computed`.
    pub fn resolve(&self, key: &str, computed: Option<String>) -> Option<String> {
        self.get(key).map(str::to_string).or(computed)
    }

    /// Ordered merge: computed attributes keep their position (unset ones are
    /// dropped unless overridden), overrides replace values in place, and
    /// override keys with no computed counterpart are appended.
    pub fn merge<'a>(
        &self,
        computed: impl IntoIterator<Item = (&'a str, Option<String>)>,
    ) -> Vec<(String, String)> {
        let mut out: Vec<(String, String)> = Vec::new();
        for (key, value) in computed {
            if let Some(value) = self.resolve(key, value) {
                out.push((key.to_string(), value));
            }
        }
        for (key, value) in &self.0 {
            if !out.iter().any(|(k, _)| k == key) {
                out.push((key.clone(), value.clone()));
            }
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttrOverrides {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |acc, (k, v)| acc.set(k, v))
    }
}

fn lookup(attrs: &[(String, String)], key: &str) -> Option<String> {
    attrs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

/* ========================================================== */
/*                     ✨ COMPONENTS ✨                       */
/* ========================================================== */

// Resolved against the overrides on every render.
const REACTIVE_ATTRS: &[&str] = &["class", "type", "disabled", "value", "aria-invalid"];

// Rendered explicitly in the view; any other merged key (`autocorrect`
// included, it has no typed attribute) is set on the element.
const STATIC_ATTRS: &[&str] = &[
    "id",
    "name",
    "title",
    "min",
    "max",
    "step",
    "placeholder",
    "autocapitalize",
    "autocomplete",
    "spellcheck",
    "autofocus",
    "readonly",
    "tabindex",
    "style",
    "data-shape",
];

/// Controlled text input.
///
/// `value` is owned by the caller: keystrokes are reported through
/// `on_change` and only show up once the caller feeds them back.
///
/// `on_focus` receives `(event, value at focus time)`. `on_blur` receives
/// `(event, value before this focus session, name)`.
#[component]
pub fn FormInput(
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] on_change: Option<Callback<String>>,
    #[prop(optional, into)] on_keydown: Option<Callback<web_sys::KeyboardEvent>>,
    #[prop(optional, into)] on_focus: Option<Callback<(web_sys::FocusEvent, String)>>,
    #[prop(optional, into)] on_blur: Option<Callback<(web_sys::FocusEvent, String, String)>>,

    #[prop(optional)] r#type: InputType,
    #[prop(optional)] size: InputSize,
    #[prop(optional)] shape: InputShape,
    #[prop(optional, into)] class: String,

    // Common HTML attributes
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: String,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] read_only: bool,
    #[prop(optional, into)] min: Option<String>,
    #[prop(optional, into)] max: Option<String>,
    #[prop(optional, into)] step: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] tab_index: Option<i32>,

    // Browser input hints; unset lets the platform decide.
    #[prop(optional)] auto_capitalize: Option<AutoCapitalize>,
    #[prop(into, default = "off".to_string())] auto_complete: String,
    #[prop(optional, into)] auto_correct: Option<String>,
    #[prop(optional)] auto_focus: Option<bool>,
    #[prop(optional)] spellcheck: Option<bool>,

    #[prop(optional)] no_spinner: bool,
    #[prop(default = true)] password_visibility_icon: bool,
    #[prop(optional, into)] invalid: Signal<bool>,

    #[prop(optional, into)] style: String,
    #[prop(optional, into)] overrides: AttrOverrides,

    // Ref for direct DOM access
    #[prop(optional)] node_ref: NodeRef<html::Input>,
) -> impl IntoView {
    let state = RwSignal::new(FormInputState::default());
    let theme = use_theme();

    let show_toggle = r#type == InputType::Password && password_visibility_icon;

    let computed_id = id.or_else(|| show_toggle.then(|| use_random_id_for("form_input")));
    let theme_style = format!("{} {}", theme.form.form_input.css_vars(), style);

    let merged = overrides.merge([
        ("id", computed_id),
        ("name", (!name.is_empty()).then(|| name.clone())),
        ("title", title),
        ("min", min),
        ("max", max),
        ("step", step),
        ("placeholder", placeholder),
        ("autocapitalize", auto_capitalize.map(|a| a.to_string())),
        ("autocomplete", Some(auto_complete)),
        ("autocorrect", auto_correct),
        ("spellcheck", spellcheck.map(|s| s.to_string())),
        ("autofocus", auto_focus.and_then(|f| f.then(String::new))),
        ("readonly", read_only.then(String::new)),
        ("tabindex", tab_index.map(|t| t.to_string())),
        ("style", Some(theme_style.trim().to_string())),
        ("data-shape", Some(shape.to_string())),
    ]);
    let extra_attrs: Vec<(String, String)> = merged
        .iter()
        .filter(|(k, _)| !STATIC_ATTRS.contains(&k.as_str()))
        .filter(|(k, _)| !REACTIVE_ATTRS.contains(&k.as_str()))
        .cloned()
        .collect();
    let input_id = lookup(&merged, "id");

    let overrides = StoredValue::new(overrides);

    let size_class = match size {
        InputSize::Large => "h-10 px-3 text-base",
        InputSize::Medium => "h-9 px-3 text-sm",
        InputSize::Small => "h-8 px-2 text-xs",
    };
    let shape_class = match shape {
        InputShape::Box => "rounded-md",
        InputShape::Rounded => "rounded-full px-4",
    };
    let toggle_gap = if show_toggle { "pr-10" } else { "" };

    let computed_class = move || {
        let semantic = form_input_class(size, &class, invalid.get(), no_spinner);
        tw_merge!(
            "flex w-full min-w-0 border py-1 outline-none transition-[color,box-shadow] md:text-sm",
            "bg-[var(--fi-default-bg)] border-[var(--fi-default-border)] text-[var(--fi-default-color)] shadow-[var(--fi-default-shadow)]",
            "placeholder:text-[var(--fi-placeholder-color)] placeholder:opacity-100",
            "[&:focus:not(:disabled)]:bg-[var(--fi-focus-bg)] [&:focus:not(:disabled)]:border-[var(--fi-focus-border)] [&:focus:not(:disabled)]:text-[var(--fi-focus-color)] [&:focus:not(:disabled)]:shadow-[var(--fi-focus-shadow)]",
            "[&.error]:bg-[var(--fi-error-bg)] [&.error]:border-[var(--fi-error-border)] [&.error]:text-[var(--fi-error-color)] [&.error]:shadow-[var(--fi-error-shadow)]",
            "disabled:cursor-not-allowed disabled:bg-[var(--fi-disabled-bg)] disabled:border-[var(--fi-disabled-border)] disabled:text-[var(--fi-disabled-color)] disabled:shadow-[var(--fi-disabled-shadow)]",
            "[&.no-spinner]:[appearance:textfield] [&.no-spinner::-webkit-inner-spin-button]:appearance-none [&.no-spinner::-webkit-outer-spin-button]:appearance-none",
            size_class,
            shape_class,
            toggle_gap,
            semantic
        )
    };

    let class_attr = move || {
        let computed = computed_class();
        overrides.with_value(|o| o.resolve("class", Some(computed)).unwrap_or_default())
    };
    let type_attr = move || {
        let ty = state.with(|s| s.effective_type(r#type, password_visibility_icon));
        overrides.with_value(|o| o.resolve("type", Some(ty.to_string())).unwrap_or_default())
    };
    let disabled_attr = move || {
        let computed = disabled.get().then(String::new);
        overrides.with_value(|o| o.resolve("disabled", computed))
    };
    let aria_invalid_attr = move || {
        let computed = invalid.get().then(|| "true".to_string());
        overrides.with_value(|o| o.resolve("aria-invalid", computed))
    };
    let value_prop = move || {
        let current = value.get();
        overrides.with_value(|o| o.resolve("value", Some(current)).unwrap_or_default())
    };

    // Override keys without a computed counterpart go straight onto the element.
    if !extra_attrs.is_empty() {
        Effect::new(move |_| {
            let Some(input) = node_ref.get() else {
                return;
            };
            for (key, val) in &extra_attrs {
                let _ = input.set_attribute(key, val);
            }
        });
    }

    let on_input = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(on_change) = on_change {
            on_change.run(input.value());
        }

        // The caller owns the value: drop edits it did not accept.
        let owned = overrides
            .with_value(|o| o.resolve("value", Some(value.get_untracked())))
            .unwrap_or_default();
        if input.value() != owned {
            input.set_value(&owned);
        }
    };

    let on_key_down = move |ev: web_sys::KeyboardEvent| {
        if let Some(on_keydown) = on_keydown {
            on_keydown.run(ev);
        }
    };

    let log_name = name.clone();
    let on_input_focus = move |ev: web_sys::FocusEvent| {
        let current = value.get_untracked();
        let snapshot = state.try_update(|s| s.focus(&current)).unwrap_or_default();
        tracing::debug!(name = %log_name, "form input focused");
        if let Some(on_focus) = on_focus {
            on_focus.run((ev, snapshot));
        }
    };

    let on_input_blur = move |ev: web_sys::FocusEvent| {
        let before = state.with_untracked(|s| s.value_before_focus.clone());
        tracing::debug!(name = %name, "form input blurred");
        if let Some(on_blur) = on_blur {
            on_blur.run((ev, before, name.clone()));
        }
        state.update(|s| {
            s.blur();
        });
    };

    let toggle_password_visibility = move |_: web_sys::MouseEvent| {
        let Some(shown) = state.try_update(|s| s.toggle_password_visibility()) else {
            return;
        };
        tracing::debug!(shown, "password visibility toggled");

        let Some(input) = node_ref.get_untracked() else {
            return;
        };
        let _ = input.focus();

        // Selection only sticks once focus (and the type swap) has landed.
        next_tick(move || {
            let _ = input.set_selection_range(CARET_END, CARET_END);
        });
    };

    let show_password = move || state.with(|s| s.show_password);

    view! {
        <div data-name="FormInput" class="relative flex w-full items-center">
            <input
                data-name="FormInputControl"
                type=type_attr
                class=class_attr
                id=lookup(&merged, "id")
                name=lookup(&merged, "name")
                title=lookup(&merged, "title")
                min=lookup(&merged, "min")
                max=lookup(&merged, "max")
                step=lookup(&merged, "step")
                placeholder=lookup(&merged, "placeholder")
                autocapitalize=lookup(&merged, "autocapitalize")
                autocomplete=lookup(&merged, "autocomplete")
                spellcheck=lookup(&merged, "spellcheck")
                autofocus=lookup(&merged, "autofocus")
                readonly=lookup(&merged, "readonly")
                tabindex=lookup(&merged, "tabindex")
                style=lookup(&merged, "style").unwrap_or_default()
                data-shape=lookup(&merged, "data-shape")
                disabled=disabled_attr
                aria-invalid=aria_invalid_attr
                prop:value=value_prop
                on:input=on_input
                on:keydown=on_key_down
                on:focus=on_input_focus
                on:blur=on_input_blur
                node_ref=node_ref
            />
            {show_toggle.then(|| view! {
                <IconButton
                    class="absolute right-1.5"
                    variant=IconButtonVariant::Default
                    size=IconButtonSize::Sm
                    attr:data-name="FormInputToggle"
                    attr:r#type="button"
                    attr:aria-label=move || if show_password() { "Hide password" } else { "Show password" }
                    attr:aria-pressed=move || show_password().to_string()
                    attr:aria-controls=input_id.clone()
                    on:click=toggle_password_visibility
                >
                    {move || if show_password() {
                        view! { <EyeOff /> }.into_any()
                    } else {
                        view! { <Eye /> }.into_any()
                    }}
                </IconButton>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_reveals_then_hides_password() {
        let mut state = FormInputState::default();
        assert_eq!(state.effective_type(InputType::Password, true), InputType::Password);

        assert!(state.toggle_password_visibility());
        assert_eq!(state.effective_type(InputType::Password, true), InputType::Text);

        assert!(!state.toggle_password_visibility());
        assert_eq!(state.effective_type(InputType::Password, true), InputType::Password);
    }

    #[test]
    fn visibility_is_ignored_without_icon() {
        assert_eq!(effective_type(InputType::Password, false, true), InputType::Password);
    }

    #[test]
    fn non_password_types_never_change() {
        for ty in [InputType::Text, InputType::Number, InputType::Search, InputType::Email] {
            for icon in [true, false] {
                for shown in [true, false] {
                    assert_eq!(effective_type(ty, icon, shown), ty);
                }
            }
        }
    }

    #[test]
    fn focus_then_blur_tracks_snapshot() {
        let mut state = FormInputState::default();
        assert_eq!(state.focus("abc"), "abc");
        assert_eq!(state.value_before_focus, "abc");

        assert_eq!(state.blur(), "abc");
        assert_eq!(state.value_before_focus, "");
        assert_eq!(state.blur(), "");
    }

    #[test]
    fn input_type_renders_lowercase() {
        assert_eq!(InputType::Password.to_string(), "password");
        assert_eq!(InputType::Email.as_ref(), "email");
        assert_eq!(InputSize::default().as_ref(), "large");
        assert_eq!(InputShape::Rounded.to_string(), "rounded");
        assert_eq!(AutoCapitalize::Characters.to_string(), "characters");
        assert_eq!(AutoCapitalize::None.to_string(), "none");
    }

    #[test]
    fn class_list_order_and_markers() {
        assert_eq!(form_input_class(InputSize::Large, "", false, false), "form-input large");
        assert_eq!(
            form_input_class(InputSize::Small, "login", true, false),
            "form-input small login error"
        );
        assert_eq!(
            form_input_class(InputSize::Medium, "", false, true),
            "form-input medium no-spinner"
        );
        assert_eq!(
            form_input_class(InputSize::Medium, " qty ", true, true),
            "form-input medium qty error no-spinner"
        );
    }

    #[test]
    fn overrides_win_over_computed() {
        let overrides = AttrOverrides::new().set("autocomplete", "email").set("class", "bare");
        assert_eq!(
            overrides.resolve("autocomplete", Some("off".to_string())).as_deref(),
            Some("email")
        );
        assert_eq!(overrides.resolve("class", None).as_deref(), Some("bare"));
        assert_eq!(overrides.resolve("name", Some("user".to_string())).as_deref(), Some("user"));
    }

    #[test]
    fn merge_keeps_order_and_appends_unknown_keys() {
        let overrides: AttrOverrides = [("data-testid", "pw"), ("placeholder", "Secret")]
            .into_iter()
            .collect();

        let merged = overrides.merge([
            ("name", Some("password".to_string())),
            ("title", None),
            ("placeholder", Some("Password".to_string())),
        ]);

        assert_eq!(
            merged,
            vec![
                ("name".to_string(), "password".to_string()),
                ("placeholder".to_string(), "Secret".to_string()),
                ("data-testid".to_string(), "pw".to_string()),
            ]
        );
    }

    #[test]
    fn override_can_fill_unset_computed_attribute() {
        let overrides = AttrOverrides::new().set("title", "Your password");
        let merged = overrides.merge([("title", None)]);
        assert_eq!(lookup(&merged, "title").as_deref(), Some("Your password"));
    }

    #[test]
    fn setting_same_override_twice_keeps_latest() {
        let overrides = AttrOverrides::new().set("step", "1").set("step", "0.5");
        assert_eq!(overrides.get("step"), Some("0.5"));
        assert_eq!(overrides.merge([]).len(), 1);
    }
}

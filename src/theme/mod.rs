use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("theme is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("window.THEME could not be stringified")]
    Stringify,
}

/// Colours for one input state (`default`, `focus`, `error`, `disabled`).
///
/// Field names follow the camelCase theme objects the widgets were designed
/// against, e.g. `form.formInput.focus.backgroundColor`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InputPalette {
    pub background_color: String,
    pub border_color: String,
    pub color: String,
    pub box_shadow: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<PlaceholderPalette>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlaceholderPalette {
    pub color: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FormInputTheme {
    pub default: InputPalette,
    pub focus: InputPalette,
    pub error: InputPalette,
    pub disabled: InputPalette,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FormTheme {
    pub form_input: FormInputTheme,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Theme {
    pub form: FormTheme,
}

fn palette(background: &str, border: &str, color: &str, shadow: &str) -> InputPalette {
    InputPalette {
        background_color: background.to_string(),
        border_color: border.to_string(),
        color: color.to_string(),
        box_shadow: shadow.to_string(),
        placeholder: None,
    }
}

impl Default for FormInputTheme {
    fn default() -> Self {
        let mut default = palette("#ffffff", "#d4d4d8", "#18181b", "0 1px 2px rgba(0,0,0,0.05)");
        default.placeholder = Some(PlaceholderPalette {
            color: "#71717a".to_string(),
        });

        Self {
            default,
            focus: palette("#ffffff", "#2563eb", "#09090b", "0 0 0 3px rgba(37,99,235,0.35)"),
            error: palette("#fef2f2", "#dc2626", "#7f1d1d", "0 0 0 3px rgba(220,38,38,0.25)"),
            disabled: palette("#f4f4f5", "#e4e4e7", "#a1a1aa", "none"),
        }
    }
}

impl FormInputTheme {
    /// Renders the palette as CSS custom properties, e.g.
    /// `--fi-focus-bg: #fff;`. The input's Tailwind classes read these back
    /// with arbitrary values such as `focus:bg-[var(--fi-focus-bg)]`.
    pub fn css_vars(&self) -> String {
        let mut out = String::new();
        for (state, p) in [
            ("default", &self.default),
            ("focus", &self.focus),
            ("error", &self.error),
            ("disabled", &self.disabled),
        ] {
            out.push_str(&format!(
                "--fi-{state}-bg: {}; --fi-{state}-border: {}; --fi-{state}-color: {}; --fi-{state}-shadow: {}; ",
                p.background_color, p.border_color, p.color, p.box_shadow
            ));
        }

        // Only the resting state styles the placeholder; fall back to its text colour.
        let placeholder = self
            .default
            .placeholder
            .as_ref()
            .map(|p| p.color.as_str())
            .unwrap_or(self.default.color.as_str());
        out.push_str(&format!("--fi-placeholder-color: {placeholder};"));
        out
    }
}

impl Theme {
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads `window.THEME`.
    ///
    /// `Ok(None)` when no theme object is present.
    pub fn from_window() -> Result<Option<Self>, ThemeError> {
        let Some(window) = web_sys::window() else {
            return Ok(None);
        };
        let Some(theme) = window.get("THEME") else {
            return Ok(None);
        };
        if theme.is_undefined() || !theme.is_object() {
            return Ok(None);
        }

        let json = js_sys::JSON::stringify(&theme)
            .ok()
            .and_then(|s| s.as_string())
            .ok_or(ThemeError::Stringify)?;

        Self::from_json(&json).map(Some)
    }

    /// Like [`Theme::from_window`], but never fails: malformed themes are
    /// logged and replaced by the default.
    pub fn load() -> Self {
        match Self::from_window() {
            Ok(Some(theme)) => theme,
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring window.THEME, using default theme");
                Self::default()
            }
        }
    }
}

#[derive(Clone)]
pub struct ThemeContext(pub Theme);

pub fn provide_theme(theme: Theme) {
    provide_context(ThemeContext(theme));
}

/// Theme from context, or the default theme when none was provided.
pub fn use_theme() -> Theme {
    use_context::<ThemeContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_default()
}

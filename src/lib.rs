//! Presentational Leptos widgets: a slide [`Carousel`](components::ui::Carousel)
//! and a controlled [`FormInput`](components::ui::FormInput) with password
//! visibility toggling.

pub mod app;
pub mod components;
pub mod logging;
pub mod models;
pub mod theme;
mod util;

use leptos::prelude::*;

pub use components::ui::*;
pub use models::SlideDescriptor;
pub use theme::{provide_theme, use_theme, Theme, ThemeError};

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(app::App);
}

use wasm_bindgen::JsCast;

/// Runs `f` on the next timer tick, after the platform has applied pending
/// focus and DOM updates.
///
/// Fire-and-forget: without a window (or if scheduling fails) `f` is dropped.
pub fn next_tick(f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        wasm_bindgen::closure::Closure::once_into_js(f)
            .as_ref()
            .unchecked_ref(),
        0,
    );
}

use std::sync::atomic::{AtomicUsize, Ordering};

const PREFIX: &str = "bridge_ui"; // Must NOT contain "/" or "-"

/// Returns a DOM id unique to this page load, e.g. `form_input_bridge_ui_7`.
pub fn use_random_id_for(element: &str) -> String {
    format!("{}_{PREFIX}_{}", element, next_id())
}

/* ========================================================== */
/*                     ✨ FUNCTIONS ✨                        */
/* ========================================================== */

static COUNTER: AtomicUsize = AtomicUsize::new(1);

fn next_id() -> usize {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_prefixed_and_unique() {
        let a = use_random_id_for("form_input");
        let b = use_random_id_for("form_input");
        assert!(a.starts_with("form_input_bridge_ui_"));
        assert_ne!(a, b);
    }
}

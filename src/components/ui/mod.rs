pub mod carousel;
pub mod form_field;
pub mod form_input;
pub mod icon_button;
pub mod placeholder_input;

// Re-export component symbols so callers can `use crate::components::ui::Carousel` etc.
pub use carousel::*;
pub use form_field::*;
pub use form_input::*;
pub use icon_button::*;
pub use placeholder_input::*;

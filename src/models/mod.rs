use leptos::prelude::*;

/// One carousel entry.
///
/// `title` is the rendering key inside a [`Carousel`](crate::components::ui::Carousel):
/// titles must be unique within one list. Duplicates are not detected and
/// leave item identity undefined.
#[derive(Clone)]
pub struct SlideDescriptor {
    pub title: String,
    pub description: String,
    pub icon: ViewFn,
}

impl SlideDescriptor {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<ViewFn>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
        }
    }
}

impl std::fmt::Debug for SlideDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideDescriptor")
            .field("title", &self.title)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

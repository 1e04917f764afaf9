use leptos::prelude::*;
use tw_merge::tw_merge;

use crate::models::SlideDescriptor;

// Scoped region classes.
const CAROUSEL_TITLE: &str = "title text-lg font-semibold leading-none";
const CAROUSEL_CONTENT: &str = "flex gap-4 overflow-x-auto snap-x snap-mandatory pb-2 no__scrollbar";
const ITEM_CONTAINER: &str = "flex shrink-0 snap-start flex-col gap-2 w-64 rounded-xl border bg-card p-4 text-card-foreground";
const ITEM_ICON: &str = "title-icon [&_svg:not([class*='size-'])]:size-6 text-primary";
const ITEM_TITLE: &str = "title text-sm font-medium";
const ITEM_DESCRIPTION: &str = "description text-xs text-muted-foreground";

#[component]
pub fn CarouselItem(
    #[prop(optional, into)] icon: ViewFn,
    #[prop(optional, into)] title: String,
    #[prop(optional, into)] description: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let merged_class = tw_merge!(ITEM_CONTAINER, class);

    view! {
        <div data-name="CarouselItem" class=merged_class>
            <div data-name="CarouselItemIcon" class=ITEM_ICON>
                {icon.run()}
            </div>
            <div data-name="CarouselItemTitle" class=ITEM_TITLE>
                {title}
            </div>
            <div data-name="CarouselItemDescription" class=ITEM_DESCRIPTION>
                {description}
            </div>
        </div>
    }
}

/// Renders `title` followed by one [`CarouselItem`] per slide, in order.
///
/// Slides are keyed by title; callers must keep titles unique.
#[component]
pub fn Carousel(
    #[prop(optional, into)] title: String,
    #[prop(into)] items: Signal<Vec<SlideDescriptor>>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let merged_class = tw_merge!("flex flex-col gap-3", class);

    view! {
        <div data-name="Carousel" class=merged_class>
            <div data-name="CarouselTitle" class=CAROUSEL_TITLE>
                {title}
            </div>
            <div data-name="CarouselContent" class=CAROUSEL_CONTENT>
                <For
                    each=move || items.get()
                    key=|item| item.title.clone()
                    let:item
                >
                    <CarouselItem
                        title=item.title
                        description=item.description
                        icon=item.icon
                    />
                </For>
            </div>
        </div>
    }
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use leptos::mount::mount_to;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn host() -> web_sys::HtmlElement {
        let doc = web_sys::window().unwrap().document().unwrap();
        let el = doc.create_element("div").unwrap();
        doc.body().unwrap().append_child(&el).unwrap();
        el.unchecked_into()
    }

    fn texts(root: &web_sys::HtmlElement, selector: &str) -> Vec<String> {
        let nodes = root.query_selector_all(selector).unwrap();
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .map(|n| n.text_content().unwrap_or_default())
            .collect()
    }

    fn slides(titles: &[&str]) -> Vec<SlideDescriptor> {
        titles
            .iter()
            .map(|t| SlideDescriptor::new(*t, format!("about {t}"), || view! { <span>"*"</span> }))
            .collect()
    }

    #[wasm_bindgen_test]
    fn test_carousel_renders_items_in_input_order() {
        let root = host();
        let items = slides(&["Zeta", "Alpha", "Mid"]);
        let _mounted = mount_to(root.clone(), move || {
            view! { <Carousel title="Features" items=items /> }
        });

        assert_eq!(texts(&root, "[data-name='CarouselTitle']"), vec!["Features"]);
        assert_eq!(
            texts(&root, "[data-name='CarouselItemTitle']"),
            vec!["Zeta", "Alpha", "Mid"]
        );
        assert_eq!(
            texts(&root, "[data-name='CarouselItemDescription']"),
            vec!["about Zeta", "about Alpha", "about Mid"]
        );
    }

    #[wasm_bindgen_test]
    fn test_carousel_empty_items_renders_title_only() {
        let root = host();
        let _mounted = mount_to(root.clone(), || {
            view! { <Carousel title="Nothing yet" items=Vec::<SlideDescriptor>::new() /> }
        });

        assert_eq!(texts(&root, "[data-name='CarouselTitle']"), vec!["Nothing yet"]);
        assert!(texts(&root, "[data-name='CarouselItem']").is_empty());
    }

    #[wasm_bindgen_test]
    fn test_carousel_item_empty_props_render_empty_regions() {
        let root = host();
        let _mounted = mount_to(root.clone(), || view! { <CarouselItem /> });

        assert_eq!(texts(&root, "[data-name='CarouselItemIcon']"), vec![""]);
        assert_eq!(texts(&root, "[data-name='CarouselItemTitle']"), vec![""]);
        assert_eq!(texts(&root, "[data-name='CarouselItemDescription']"), vec![""]);
    }

    #[wasm_bindgen_test]
    fn test_carousel_item_regions_follow_fixed_order() {
        let root = host();
        let _mounted = mount_to(root.clone(), || {
            view! { <CarouselItem title="Sync" description="Across devices" icon=|| view! { <b>"i"</b> } /> }
        });

        let item = root
            .query_selector("[data-name='CarouselItem']")
            .unwrap()
            .expect("item should render");
        let children = item.children();
        let names: Vec<String> = (0..children.length())
            .filter_map(|i| children.item(i))
            .filter_map(|c| c.get_attribute("data-name"))
            .collect();
        assert_eq!(
            names,
            vec!["CarouselItemIcon", "CarouselItemTitle", "CarouselItemDescription"]
        );
        assert_eq!(texts(&root, "[data-name='CarouselItemIcon']"), vec!["i"]);
    }
}

use leptos::prelude::*;
use leptos_ui::variants;

variants! {
    IconButton {
        base: "inline-flex items-center justify-center shrink-0 rounded-md text-muted-foreground transition-colors outline-none disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 [&_svg]:shrink-0 focus-visible:ring-ring/50 focus-visible:ring-[3px] hover:cursor-pointer touch-manipulation [-webkit-tap-highlight-color:transparent] select-none",
        variants: {
            variant: {
                Default: "bg-transparent hover:bg-accent hover:text-accent-foreground",
                Outline: "border bg-background shadow-xs hover:bg-accent hover:text-accent-foreground",
            },
            size: {
                Default: "size-9",
                Sm: "size-7",
                Icon: "size-6 rounded-sm",
            }
        },
        component: {
            element: button,
            support_href: true,
            support_aria_current: true
        }
    }
}

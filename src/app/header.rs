use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};

use crate::site::{Theme, SITE};

const NAV_LINKS: [(&str, &str); 4] = [
    ("/", "Home"),
    ("/certifications", "Certifications"),
    ("/photography", "Photography"),
    ("/contact", "Contact"),
];

#[component]
pub fn Header() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let pathname = use_location().pathname;
    let (menu_open, set_menu_open) = signal(false);

    let links = move || {
        NAV_LINKS
            .iter()
            .map(|&(href, label)| {
                let class = move || {
                    if pathname.get() == href {
                        "px-3 py-2 rounded-md text-cyan font-medium"
                    } else {
                        "px-3 py-2 rounded-md hover:text-cyan transition-colors duration-200"
                    }
                };
                view! {
                    <A href=href attr:class=class on:click=move |_| set_menu_open.set(false)>
                        {label}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <header class="sticky top-0 z-50 shadow-lg backdrop-blur-sm bg-background/80">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-4">
                <div class="flex items-center justify-between">
                    <A href="/" attr:class="text-xl font-bold">
                        {SITE.owner}
                    </A>
                    <nav class="hidden md:flex items-center gap-2">{links}</nav>
                    <div class="flex items-center gap-2">
                        <button
                            class="px-3 py-2 rounded-md border border-muted/30 hover:bg-brightBlack/30"
                            aria-label="Toggle theme"
                            on:click=move |_| theme.update(|t| *t = t.toggled())
                        >
                            {move || theme.get().icon()}
                        </button>
                        <button
                            class="md:hidden px-3 py-2 rounded-md border border-muted/30"
                            aria-label="Toggle menu"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            "☰"
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <nav class="md:hidden flex flex-col mt-2">{links}</nav>
                </Show>
            </div>
        </header>
    }
}

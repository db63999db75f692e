mod certifications;
mod contact;
mod footer;
mod header;
mod homepage;
mod photography;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::site::{Theme, SITE};
use certifications::CertificationsPage;
use contact::ContactPage;
use footer::Footer;
use header::Header;
use homepage::HomePage;
use photography::PhotographyPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=SITE.tagline />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let theme = RwSignal::new(Theme::default());
    provide_context(theme);

    view! {
        <Title formatter=|title| format!("{} - {title}", SITE.owner) />

        <Router>
            <div class=move || {
                format!(
                    "{} min-h-screen flex flex-col bg-background text-foreground transition-colors duration-300",
                    theme.get().class(),
                )
            }>
                <Header />
                <main class="flex flex-col flex-grow items-center mx-auto w-full max-w-7xl px-4">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/certifications") view=CertificationsPage />
                        <Route path=path!("/contact") view=ContactPage />
                        <Route path=path!("/photography") view=PhotographyPage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <div class="text-center my-16 section-content">
            <h1 class="text-4xl font-bold mb-4">"404"</h1>
            <p class="text-muted mb-6">"That page doesn't exist."</p>
            <A href="/" attr:class="text-cyan hover:underline">
                "Back home"
            </A>
        </div>
    }
}

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::*;

use crate::site::SITE;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="About Me" />
        <div class="max-w-6xl mx-auto page-content">
            <Hero />
            <section class="flex flex-col lg:flex-row gap-8 lg:gap-12 section-content">
                <div class="w-full lg:max-w-2xl">
                    <h2 class="text-xl font-bold my-8">"What I Do"</h2>
                    <p class="text-base mb-4 leading-relaxed">
                        "I build and run the platforms other engineers ship on: "
                        <strong>"multi-region Kubernetes clusters"</strong>
                        ", infrastructure as code, and the CI/CD pipelines that tie them together."
                    </p>
                    <p class="text-base mb-4 leading-relaxed">
                        "Day to day that means "
                        <span class="text-cyan">"Rust, Go, Terraform and a lot of YAML"</span>
                        ", plus the occasional front-end when a tool needs a face."
                    </p>
                </div>
                <div class="w-full lg:max-w-2xl">
                    <h2 class="text-xl font-bold my-8">"Beyond Work"</h2>
                    <p class="text-base mb-4 leading-relaxed">
                        "When I'm not at a keyboard I'm usually behind a camera. The "
                        <A href="/photography" attr:class="text-cyan hover:underline">
                            "photography"
                        </A> " section is where that work will live."
                    </p>
                    <div class="bg-brightBlack/30 p-4 rounded-md border-l-4 border-purple mb-4">
                        <p class="text-sm text-purple mb-2 font-medium">"💡 Open to new projects"</p>
                        <p class="text-sm">
                            "Have a platform problem worth solving? Grab a slot on the "
                            <A href="/contact" attr:class="underline">
                                "contact"
                            </A> " page."
                        </p>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero-banner flex flex-col items-center text-center gap-6 py-16 lg:py-24 section-content">
            <p class="text-sm uppercase tracking-widest text-muted">{SITE.location}</p>
            <h1 class="text-4xl lg:text-6xl font-bold">
                "Hi, I'm " <span class="text-cyan">{SITE.owner}</span>
            </h1>
            <h2 class="text-xl lg:text-2xl text-purple font-medium">{SITE.title}</h2>
            <p class="max-w-2xl text-lg leading-relaxed">{SITE.tagline}</p>
            <div class="flex flex-col sm:flex-row gap-4 mt-4">
                <A
                    href="/certifications"
                    attr:class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30"
                >
                    "View Certifications"
                </A>
                <A
                    href="/contact"
                    attr:class="px-6 py-3 rounded-md font-medium transition-all duration-200 border border-muted/30 hover:bg-brightBlack/30"
                >
                    "Get in Touch"
                </A>
            </div>
        </section>
    }
}

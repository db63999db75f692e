use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use crate::site::SITE;

const BUILD_TIME: &str = env!("BUILD_TIME");

fn build_date() -> String {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|t| t.format("%b %e %Y").to_string())
        .unwrap_or_else(|_| BUILD_TIME.to_string())
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();
    view! {
        <footer class="mt-16 border-t border-muted/30">
            <div class="mx-auto max-w-7xl px-4 py-6 flex flex-col sm:flex-row items-center justify-between gap-4 text-sm text-muted">
                <div>{format!("© {year} {}", SITE.owner)}</div>
                <div class="flex gap-4 text-xl">
                    {SITE
                        .socials
                        .iter()
                        .map(|s| {
                            view! {
                                <a
                                    href=s.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="hover:text-foreground"
                                    aria-label=s.label
                                >
                                    <i class=s.icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div>"Built " {build_date()}</div>
            </div>
        </footer>
    }
}

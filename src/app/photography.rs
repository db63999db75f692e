use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn PhotographyPage() -> impl IntoView {
    view! {
        <Title text="Photography" />
        <div class="max-w-3xl mx-auto my-16 text-center section-content">
            <h1 class="text-3xl font-bold mb-4">"Photography"</h1>
            <p class="text-lg text-muted mb-8">
                "A gallery of landscape and street photography is on its way."
            </p>
            <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                {(0..6)
                    .map(|_| view! { <div class="loading-skeleton aspect-square rounded-lg"></div> })
                    .collect_view()}
            </div>
            <p class="mt-8 text-sm text-muted">"📷 Coming soon"</p>
        </div>
    }
}

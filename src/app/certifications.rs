use std::{rc::Rc, sync::Arc, time::Duration};

use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_interval_fn, use_window_size, UseWindowSizeReturn};

use crate::carousel::{
    Activation, AutoAdvance, Carousel, CarouselEvent, LayoutProfile, RenderTuple, Scheduler,
    TimerHandle, ViewportObserver, AUTO_ADVANCE_INTERVAL, DEFAULT_RADIUS,
};
use crate::certifications::{load_certifications, Certification};

/// Browser window width as tracked by leptos-use.
#[derive(Clone, Copy)]
struct WindowWidth(Signal<f64>);

impl ViewportObserver for WindowWidth {
    fn viewport_width(&self) -> f64 {
        self.0.get()
    }
}

/// Repeating timers backed by `use_interval_fn`. The interval is also
/// stopped when the owning reactive scope is disposed.
struct IntervalScheduler;

struct IntervalHandle {
    pause: Arc<dyn Fn() + Send + Sync>,
}

impl TimerHandle for IntervalHandle {
    fn cancel(&self) {
        (self.pause)();
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = IntervalHandle;

    fn repeat(&self, interval: Duration, tick: Rc<dyn Fn()>) -> IntervalHandle {
        let pausable = use_interval_fn(move || tick(), interval.as_millis() as u64);
        IntervalHandle {
            pause: Arc::new(pausable.pause),
        }
    }
}

#[component]
pub fn CertificationsPage() -> impl IntoView {
    let carousel = load_certifications()
        .map_err(|e| e.to_string())
        .and_then(|certs| Carousel::new(certs).map_err(|e| e.to_string()));

    view! {
        <Title text="Certifications" />
        <div class="w-full text-center my-8 section-content">
            <h1 class="font-bold text-3xl lg:text-4xl mb-4">"Certifications"</h1>
            <p class="max-w-2xl mx-auto text-lg text-muted">
                "Credentials I've earned along the way. Click a card to bring it forward, or the center card to verify it."
            </p>
        </div>
        {match carousel {
            Ok(carousel) => Either::Left(view! { <CertificationsCarousel carousel /> }),
            Err(e) => {
                log::error!("couldn't load certifications: {e}");
                Either::Right(
                    view! {
                        <p class="text-red text-center">"Certifications are unavailable right now."</p>
                    },
                )
            }
        }}
    }
}

#[component]
fn CertificationsCarousel(carousel: Carousel<Certification>) -> impl IntoView {
    let carousel = RwSignal::new(carousel);
    let total = carousel.with_untracked(|c| c.items().len());

    let dispatch = move |event: CarouselEvent| {
        carousel.update(|c| match c.apply(event) {
            Ok(()) => log::debug!("carousel {event:?} -> {}", c.current()),
            Err(e) => log::warn!("carousel rejected {event:?}: {e}"),
        });
    };

    let UseWindowSizeReturn { width, .. } = use_window_size();
    let viewport = WindowWidth(width);
    let layout = Memo::new(move |_| LayoutProfile::observe(&viewport));

    let auto_advance = AutoAdvance::start(&IntervalScheduler, AUTO_ADVANCE_INTERVAL, move || {
        dispatch(CarouselEvent::Advance)
    });
    on_cleanup(move || auto_advance.stop());

    let cards = move || {
        let layout = layout.get();
        carousel.with(|c| {
            c.project(&layout, DEFAULT_RADIUS)
                .iter()
                .map(|tuple| card_view(tuple, &layout, dispatch))
                .collect_view()
        })
    };

    view! {
        <section class="w-full flex flex-col items-center section-content">
            <div
                class="relative w-full overflow-hidden"
                style=move || format!("height: {}px;", layout.get().card_height + 40.0)
            >
                {cards}
            </div>
            <div class="flex items-center gap-6 mt-6">
                <button
                    class="carousel-arrow"
                    aria-label="Previous certification"
                    on:click=move |_| dispatch(CarouselEvent::Retreat)
                >
                    "‹"
                </button>
                <span class="text-sm text-muted tabular-nums">
                    {move || format!("{} / {total}", carousel.with(|c| c.current()) + 1)}
                </span>
                <button
                    class="carousel-arrow"
                    aria-label="Next certification"
                    on:click=move |_| dispatch(CarouselEvent::Advance)
                >
                    "›"
                </button>
            </div>
        </section>
    }
}

fn card_style(tuple: &RenderTuple<'_, Certification>, layout: &LayoutProfile) -> String {
    format!(
        "width: {}px; height: {}px; transform: translateX(calc(-50% + {}px)) scale({}); opacity: {}; z-index: {};",
        layout.card_width, layout.card_height, tuple.x, tuple.scale, tuple.opacity, tuple.z_index,
    )
}

fn card_view(
    tuple: &RenderTuple<'_, Certification>,
    layout: &LayoutProfile,
    dispatch: impl Fn(CarouselEvent) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let style = card_style(tuple, layout);
    let cert = tuple.item.clone();
    let body = view! { <CardBody cert=cert.clone() /> };
    match tuple.activation() {
        Activation::OpenCenter => Either::Left(view! {
            <a
                href=cert.credential_url
                target="_blank"
                rel="noopener noreferrer"
                class="carousel-card carousel-card-center"
                style=style
                aria-label=format!("Verify {}", cert.title)
            >
                {body}
            </a>
        }),
        Activation::JumpTo(index) => Either::Right(view! {
            <button
                class="carousel-card"
                style=style
                aria-label=format!("Show {}", cert.title)
                on:click=move |_| dispatch(CarouselEvent::JumpTo(index))
            >
                {body}
            </button>
        }),
    }
}

#[component]
fn CardBody(cert: Certification) -> impl IntoView {
    let badge = match cert.image.clone() {
        Some(src) => Either::Left(view! { <img src=src alt="" class="h-24 w-24 object-contain" /> }),
        None => Either::Right(view! {
            <div class="h-24 w-24 rounded-full bg-cyan/20 text-cyan flex items-center justify-center text-3xl font-bold">
                {cert.monogram()}
            </div>
        }),
    };
    view! {
        <div class="flex flex-col items-center justify-between h-full p-6 text-center">
            {badge}
            <div>
                <h3 class="text-lg font-bold leading-tight mb-2">{cert.title}</h3>
                <p class="text-sm text-muted">{cert.issuer}</p>
            </div>
            <div class="flex flex-wrap justify-center gap-1">
                {cert
                    .skills
                    .into_iter()
                    .map(|skill| {
                        view! {
                            <span class="rounded-md px-2 py-1 bg-brightBlack text-xs">{skill}</span>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="text-xs text-muted">{cert.issued.format("%b %Y").to_string()}</p>
        </div>
    }
}

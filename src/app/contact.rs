use chrono::{Local, NaiveDate, NaiveTime, Utc};
use leptos::{either::*, prelude::*};
use leptos_meta::Title;

use crate::booking::{
    is_bookable, time_slots, today_at, Booking, BookingEvent, ContactForm, Field, FieldError,
    FormStatus, MonthView,
};
use crate::site::SITE;

const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact" />
        <div class="w-full max-w-6xl mx-auto my-8 page-content">
            <div class="text-center mb-8 section-content">
                <h1 class="font-bold text-3xl lg:text-4xl mb-4">"Let's Talk"</h1>
                <p class="max-w-2xl mx-auto text-lg text-muted">
                    "Send a note or pick a time for a quick call. "
                    <a href=format!("mailto:{}", SITE.email) class="text-cyan hover:underline">
                        {SITE.email}
                    </a>
                </p>
            </div>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 section-content">
                <MessageForm />
                <Scheduler />
            </div>
        </div>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let (errors, set_errors) = signal(Vec::<FieldError>::new());
    let (status, set_status) = signal(FormStatus::default());

    let error_for = move |field: Field| {
        move || {
            errors
                .get()
                .into_iter()
                .find(|e| e.field() == field)
                .map(|e| view! { <p class="text-red text-sm mt-1">{e.to_string()}</p> })
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(ContactForm::submit) {
            Ok(new_status) => {
                log::debug!("contact form accepted (not sent anywhere)");
                set_errors.set(Vec::new());
                set_status.set(new_status);
            }
            Err(errs) => {
                log::debug!("contact form has {} invalid fields", errs.len());
                set_errors.set(errs);
            }
        }
    };

    let reset = move |_| {
        form.set(ContactForm::default());
        set_status.set(FormStatus::Editing);
    };

    let input_class = "w-full px-4 py-2 rounded-md border border-muted focus:outline-none focus:ring-2 focus:ring-cyan bg-background text-foreground placeholder-muted";

    view! {
        <div class="bg-brightBlack/30 p-6 rounded-lg border border-muted/30">
            <h2 class="text-xl font-bold mb-4">"Send a Message"</h2>
            {move || match status.get() {
                FormStatus::Sent => Either::Left(view! {
                    <div class="text-center py-12">
                        <p class="text-green text-lg font-medium mb-4">
                            "✓ Thanks! I'll get back to you soon."
                        </p>
                        <button class="text-cyan hover:underline" on:click=reset>
                            "Send another"
                        </button>
                    </div>
                }),
                FormStatus::Editing => Either::Right(view! {
                    <form class="space-y-4" on:submit=on_submit novalidate>
                        <div>
                            <label for="contact_name" class="block mb-1 font-medium">"Name"</label>
                            <input
                                id="contact_name"
                                class=input_class
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />
                            {error_for(Field::Name)}
                        </div>
                        <div>
                            <label for="contact_email" class="block mb-1 font-medium">"Email"</label>
                            <input
                                id="contact_email"
                                type="email"
                                class=input_class
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            />
                            {error_for(Field::Email)}
                        </div>
                        <div>
                            <label for="contact_subject" class="block mb-1 font-medium">
                                "Subject " <span class="text-muted text-sm">"(optional)"</span>
                            </label>
                            <input
                                id="contact_subject"
                                class=input_class
                                prop:value=move || form.with(|f| f.subject.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.subject = event_target_value(&ev))
                                }
                            />
                        </div>
                        <div>
                            <label for="contact_message" class="block mb-1 font-medium">"Message"</label>
                            <textarea
                                id="contact_message"
                                rows="5"
                                class=input_class
                                prop:value=move || form.with(|f| f.message.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.message = event_target_value(&ev))
                                }
                            ></textarea>
                            {error_for(Field::Message)}
                        </div>
                        <button
                            type="submit"
                            class="px-6 py-2 bg-cyan/20 hover:bg-cyan/30 text-cyan rounded-md border border-cyan/30 transition-all duration-200"
                        >
                            "Send"
                        </button>
                    </form>
                }),
            }}
        </div>
    }
}

#[component]
fn Scheduler() -> impl IntoView {
    // Set from the visitor's clock once hydrated. The server leaves the
    // calendar empty so both renders agree on its markup.
    let today = RwSignal::new(None::<NaiveDate>);
    let month = RwSignal::new(None::<MonthView>);
    let booking = RwSignal::new(Booking::default());
    let (notice, set_notice) = signal(None::<String>);

    Effect::new(move |_| {
        let now = Local::now();
        let date = today_at(now.with_timezone(&Utc), *now.offset());
        today.set(Some(date));
        month.set(Some(MonthView::containing(date)));
    });

    let send = move |event: BookingEvent| {
        let Some(today) = today.get_untracked() else {
            return;
        };
        let next = booking.get_untracked().apply(event, today);
        match next {
            Ok(next) => {
                log::debug!("booking {event:?} -> {next:?}");
                booking.set(next);
                set_notice.set(None);
            }
            Err(e) => set_notice.set(Some(e.to_string())),
        }
    };

    let day_cell = move |today: NaiveDate, day: Option<NaiveDate>| match day {
        None => EitherOf3::A(view! { <div></div> }),
        Some(date) if !is_bookable(date, today) => EitherOf3::B(view! {
            <div class="py-2 text-muted/50">{date.format("%e").to_string()}</div>
        }),
        Some(date) => EitherOf3::C(view! {
            <button
                class=move || {
                    if booking.with(|b| b.date() == Some(date)) {
                        "py-2 rounded-md bg-cyan text-background font-bold"
                    } else {
                        "py-2 rounded-md hover:bg-cyan/20"
                    }
                }
                on:click=move |_| send(BookingEvent::PickDate(date))
            >
                {date.format("%e").to_string()}
            </button>
        }),
    };

    let slot_button = move |time: NaiveTime| {
        view! {
            <button
                class=move || {
                    if booking.with(|b| b.time() == Some(time)) {
                        "px-2 py-1 rounded-md bg-purple text-background font-medium text-sm"
                    } else {
                        "px-2 py-1 rounded-md border border-muted/30 hover:bg-purple/20 text-sm"
                    }
                }
                on:click=move |_| send(BookingEvent::PickSlot(time))
            >
                {time.format("%H:%M").to_string()}
            </button>
        }
    };

    view! {
        <div class="bg-brightBlack/30 p-6 rounded-lg border border-muted/30">
            <h2 class="text-xl font-bold mb-4">"Book a Call"</h2>
            <Show
                when=move || booking.with(Booking::is_confirmed)
                fallback=move || {
                    view! {
                        <div class="flex items-center justify-between mb-2">
                            <button
                                class="px-2 hover:text-cyan"
                                aria-label="Previous month"
                                on:click=move |_| {
                                    month.update(|m| *m = m.map(MonthView::prev))
                                }
                            >
                                "‹"
                            </button>
                            <span class="font-medium">{move || month.get().map(|m| m.title())}</span>
                            <button
                                class="px-2 hover:text-cyan"
                                aria-label="Next month"
                                on:click=move |_| {
                                    month.update(|m| *m = m.map(MonthView::next))
                                }
                            >
                                "›"
                            </button>
                        </div>
                        <div class="grid grid-cols-7 gap-1 text-center text-sm">
                            {WEEKDAYS
                                .iter()
                                .map(|d| view! { <div class="text-muted py-1">{*d}</div> })
                                .collect_view()}
                            {move || match (today.get(), month.get()) {
                                (Some(today), Some(month)) => Either::Left(
                                    month
                                        .weeks()
                                        .into_iter()
                                        .flatten()
                                        .map(|day| day_cell(today, day))
                                        .collect_view(),
                                ),
                                _ => Either::Right(view! {
                                    <div class="col-span-7 loading-skeleton h-48 rounded"></div>
                                }),
                            }}
                        </div>
                        <Show when=move || booking.with(|b| b.date().is_some())>
                            <div class="mt-4">
                                <p class="text-sm text-muted mb-2">"Pick a time (local):"</p>
                                <div class="grid grid-cols-4 gap-2">
                                    {time_slots().into_iter().map(slot_button).collect_view()}
                                </div>
                            </div>
                        </Show>
                        <button
                            class="mt-4 px-6 py-2 bg-cyan/20 hover:bg-cyan/30 text-cyan rounded-md border border-cyan/30 disabled:opacity-40"
                            disabled=move || booking.with(|b| b.time().is_none())
                            on:click=move |_| send(BookingEvent::Confirm)
                        >
                            "Confirm"
                        </button>
                    }
                }
            >
                <div class="text-center py-12">
                    <p class="text-green text-lg font-medium mb-2">"✓ You're booked!"</p>
                    <p class="mb-4">
                        {move || {
                            let b = booking.get();
                            match (b.date(), b.time()) {
                                (Some(d), Some(t)) => {
                                    format!("{} at {}", d.format("%A, %B %e"), t.format("%H:%M"))
                                }
                                _ => String::new(),
                            }
                        }}
                    </p>
                    <p class="text-xs text-muted mb-4">
                        "This is a demo scheduler; no invite is actually sent."
                    </p>
                    <button
                        class="text-cyan hover:underline"
                        on:click=move |_| send(BookingEvent::Reset)
                    >
                        "Book another time"
                    </button>
                </div>
            </Show>
            {move || notice.get().map(|n| view! { <p class="text-red text-sm mt-2">{n}</p> })}
        </div>
    }
}

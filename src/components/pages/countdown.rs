use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::config::countdown::{START_SECONDS, TICK_MS};

/// Counts down once per tick and stops at zero.
#[component]
pub fn CountdownPage() -> impl IntoView {
    let remaining = RwSignal::new(START_SECONDS);

    // Dropped with the page's owner, which cancels the timer
    let interval = Interval::new(TICK_MS, move || {
        remaining.update(|s| *s = s.saturating_sub(1));
    });
    StoredValue::new_local(interval);

    view! {
        <section>
            <h1>"Countdown"</h1>
            <p>
                {move || match remaining.get() {
                    0 => "Liftoff!".to_string(),
                    s => format!("{}s", s),
                }}
            </p>
            <button on:click=move |_| remaining.set(START_SECONDS)>"Reset"</button>
        </section>
    }
}

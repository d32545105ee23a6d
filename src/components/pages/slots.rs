use leptos::prelude::*;

use crate::config::slots::{REELS, SYMBOLS};

fn random_symbol() -> usize {
    let index = (js_sys::Math::random() * SYMBOLS.len() as f64) as usize;
    index.min(SYMBOLS.len() - 1)
}

#[component]
pub fn SlotsPage() -> impl IntoView {
    let reels = RwSignal::new(vec![0usize; REELS]);
    let spins = RwSignal::new(0u32);

    let spin = move |_| {
        reels.set((0..REELS).map(|_| random_symbol()).collect());
        spins.update(|n| *n += 1);
    };
    let jackpot = move || {
        spins.get() > 0 && reels.with(|r| r.windows(2).all(|w| w[0] == w[1]))
    };

    view! {
        <section>
            <h1>"Slots"</h1>
            <p>
                {move || reels.with(|r| {
                    r.iter().map(|&i| SYMBOLS[i]).collect::<Vec<_>>().join(" | ")
                })}
            </p>
            <button on:click=spin>"Spin"</button>
            <Show when=jackpot>
                <p>"Jackpot!"</p>
            </Show>
        </section>
    }
}

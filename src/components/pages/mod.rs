//! Page components mounted by the router.
//!
//! Page content is deliberately thin; the router only needs something to mount.

mod countdown;
mod home;
mod slots;

use leptos::prelude::*;

use crate::models::Page;

pub use countdown::CountdownPage;
pub use home::HomePage;
pub use slots::SlotsPage;

/// Render a page for the mount point.
pub fn render(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Countdown => view! { <CountdownPage /> }.into_any(),
        Page::Slots => view! { <SlotsPage /> }.into_any(),
    }
}

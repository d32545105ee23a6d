use leptos::prelude::*;

use crate::components::router::RouterLink;
use crate::config::APP_NAME;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section>
            <h1>{APP_NAME}</h1>
            <p>"Pick a page."</p>
            <ul>
                <li><RouterLink to="/countdown">"Countdown"</RouterLink></li>
                <li><RouterLink to="/slots">"Slots"</RouterLink></li>
            </ul>
        </section>
    }
}

//! Application router components.
//!
//! Wires [`waypoint_core::Router`] into the component tree.
//!
//! # Architecture
//!
//! - **Host history is the source of truth**: the core router reads and
//!   writes it through [`BrowserHistory`]
//! - **One owned state, one signal**: the router lives in a `StoredValue`;
//!   after every operation a clone of its navigation state is published to a
//!   single `RwSignal` that the mount point reads
//! - **popstate/hashchange events**: browser back/forward and typed URLs
//!   reach the router through `sync`

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;
use waypoint_core::{
    HistoryMode, Location, NavigateOptions, NavigationState, NavigationTarget, Router,
};

use crate::components::pages;
use crate::config::APP_NAME;
use crate::models::Page;
use crate::utils::BrowserHistory;
use crate::utils::dom::set_document_title;

/// The router type used by the application.
pub type BrowserRouter = Router<Page, BrowserHistory>;

// ============================================================================
// RouterContext
// ============================================================================

/// Reactive handle to the application router.
///
/// `Copy` because both fields are arena handles.
#[derive(Clone, Copy)]
pub struct RouterContext {
    router: StoredValue<BrowserRouter>,
    state: RwSignal<NavigationState<Page>>,
}

impl RouterContext {
    pub fn new(router: BrowserRouter) -> Self {
        let state = RwSignal::new(router.state().clone());
        Self {
            router: StoredValue::new(router),
            state,
        }
    }

    /// Current navigation state (reactive).
    pub fn state(&self) -> ReadSignal<NavigationState<Page>> {
        self.state.read_only()
    }

    /// Navigate to a path or named route.
    pub fn navigate(&self, target: impl Into<NavigationTarget>, options: NavigateOptions) {
        let target = target.into();
        let result = self
            .router
            .try_update_value(|router| router.navigate(target, options));
        match result {
            Some(Ok(outcome)) => {
                tracing::debug!(?outcome, "navigation finished");
                self.publish();
            }
            Some(Err(err)) => tracing::error!(%err, "navigation rejected"),
            None => {}
        }
    }

    /// Go one entry back.
    ///
    /// `history.go` is asynchronous in the browser, so the state published
    /// here is usually unchanged. The visible update arrives later, when the
    /// `popstate` listener calls [`sync`](Self::sync).
    pub fn back(&self) {
        self.apply(BrowserRouter::back);
    }

    /// Go one entry forward. Like [`back`](Self::back), the update arrives
    /// with `popstate`.
    pub fn forward(&self) {
        self.apply(BrowserRouter::forward);
    }

    /// Pick up a location change made by the browser.
    pub fn sync(&self) {
        self.apply(BrowserRouter::sync);
    }

    /// Href for a path target under the configured addressing mode.
    pub fn href(&self, path: &str) -> String {
        self.router.with_value(|router| {
            let location = Location::parse(path);
            router.config().mode.href(&location)
        })
    }

    /// Whether the router addresses locations through the fragment.
    pub fn is_hash_mode(&self) -> bool {
        self.router
            .with_value(|router| router.config().mode == HistoryMode::Hash)
    }

    /// Static routes as `(path, label)` pairs, in table order.
    pub fn links(&self) -> Vec<(String, String)> {
        self.router.with_value(|router| {
            router
                .table()
                .iter()
                .filter(|route| route.pattern().is_static())
                .map(|route| {
                    let label = route.name().unwrap_or(route.page().title()).to_string();
                    (route.path(), label)
                })
                .collect()
        })
    }

    fn apply(&self, op: fn(&mut BrowserRouter) -> bool) {
        if self.router.try_update_value(op) == Some(true) {
            self.publish();
        }
    }

    fn publish(&self) {
        let state = self.router.with_value(|router| router.state().clone());
        self.state.set(state);
    }
}

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Provides the [`RouterContext`], subscribes to browser history events and
/// renders the navigation bar above the [`RouterView`].
#[component]
pub fn AppRouter(router: BrowserRouter) -> impl IntoView {
    let ctx = RouterContext::new(router);
    provide_context(ctx);

    // Set up popstate/hashchange listeners (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            ctx.sync();
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let callback = closure.as_ref().unchecked_ref();
            let _ = window.add_event_listener_with_callback("popstate", callback);
            if ctx.is_hash_mode() {
                let _ = window.add_event_listener_with_callback("hashchange", callback);
            }
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Keep the document title in step with the active page
    Effect::new(move |_| {
        let title = ctx.state().with(|s| s.page().map(|p| p.title()));
        match title {
            Some(title) => set_document_title(&format!("{} | {}", title, APP_NAME)),
            None => set_document_title(APP_NAME),
        }
    });

    view! {
        <NavBar />
        <main>
            <RouterView />
        </main>
    }
}

// ============================================================================
// Mount point
// ============================================================================

/// Renders the page of the active route; renders nothing when unmatched.
#[component]
pub fn RouterView() -> impl IntoView {
    let ctx = use_context::<RouterContext>().expect("RouterContext must be provided");
    let page = Memo::new(move |_| ctx.state().with(|s| s.page().copied()));

    move || page.get().map(pages::render)
}

// ============================================================================
// Links
// ============================================================================

/// Anchor that navigates through the router instead of reloading.
///
/// Modified clicks (ctrl/meta/shift/alt, non-primary button) are left to the
/// browser so "open in new tab" keeps working.
#[component]
pub fn RouterLink(
    #[prop(into)] to: String,
    #[prop(optional)] replace: bool,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<RouterContext>().expect("RouterContext must be provided");
    let href = ctx.href(&to);
    let target_path = Location::parse(&to).path().to_string();
    let is_current = Memo::new(move |_| ctx.state().with(|s| s.location().path() == target_path));

    let on_click = move |ev: leptos::ev::MouseEvent| {
        if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key() {
            return;
        }
        ev.prevent_default();
        let options = if replace {
            NavigateOptions::REPLACE
        } else {
            NavigateOptions::PUSH
        };
        ctx.navigate(to.as_str(), options);
    };

    view! {
        <a
            href=href
            aria-current=move || is_current.get().then_some("page")
            on:click=on_click
        >
            {children()}
        </a>
    }
}

/// Navigation bar listing every static route plus back/forward controls.
#[component]
fn NavBar() -> impl IntoView {
    let ctx = use_context::<RouterContext>().expect("RouterContext must be provided");

    let links = ctx
        .links()
        .into_iter()
        .map(|(path, label)| view! { <RouterLink to=path>{label}</RouterLink> })
        .collect::<Vec<_>>();

    view! {
        <nav>
            <strong>{APP_NAME}</strong>
            {links}
            <button on:click=move |_| ctx.back() title="Back">"<"</button>
            <button on:click=move |_| ctx.forward() title="Forward">">"</button>
        </nav>
    }
}

//! Root application module.
//!
//! Loads the bundled route table, builds the router and renders the App
//! component following Leptos conventions.

use leptos::prelude::*;
use waypoint_core::{ConfigError, RouteConfig, RouteTable, Router, RouterConfig};

use crate::components::{AppRouter, BrowserRouter};
use crate::config::ROUTES_TOML;
use crate::models::Page;
use crate::utils::BrowserHistory;

/// Parse and validate the bundled route table.
///
/// Every `page` key must name a [`Page`]; disabled routes are dropped.
pub fn bundled_routes() -> Result<(RouteTable<Page>, RouterConfig), ConfigError> {
    let config = RouteConfig::from_toml(ROUTES_TOML)?;
    let table = config.build_table(Page::from_key)?;
    Ok((table, config.router))
}

/// Build the browser router from the bundled route table.
///
/// Reads the current browser location, so call it once at startup.
pub fn build_router() -> Result<BrowserRouter, ConfigError> {
    let (table, config) = bundled_routes()?;
    Ok(Router::new(table, config, BrowserHistory))
}

/// Root application component.
#[component]
pub fn App(router: BrowserRouter) -> impl IntoView {
    view! { <AppRouter router=router /> }
}

//! Route-table configuration files.
//!
//! Route tables are data, so deployments describe them in TOML:
//!
//! ```toml
//! [history]
//! mode = "hash"        # or "path"
//! base = "/"           # path mode only
//! not_found = "blank"  # or "home"
//!
//! [[routes]]
//! path = "/"
//! name = "Home"
//! page = "home"
//!
//! [[routes]]
//! path = "/slots"
//! page = "slots"
//! enabled = false      # disabled routes are never registered
//! ```

use serde::Deserialize;
use tracing::debug;

use crate::error::{ConfigError, RouteTableError};
use crate::history::HistoryMode;
use crate::route::Route;
use crate::router::{NotFoundPolicy, RouterConfig};
use crate::table::RouteTable;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RouteFile {
    #[serde(default)]
    history: HistorySection,
    #[serde(default)]
    routes: Vec<RouteEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct HistorySection {
    #[serde(default)]
    mode: ModeKey,
    #[serde(default)]
    base: String,
    #[serde(default)]
    not_found: NotFoundKey,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ModeKey {
    #[default]
    Hash,
    Path,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum NotFoundKey {
    #[default]
    Blank,
    Home,
}

/// One `[[routes]]` entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteEntry {
    pub path: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Key of the page this route renders.
    pub page: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

/// A parsed route-table file.
#[derive(Clone, Debug)]
pub struct RouteConfig {
    pub router: RouterConfig,
    pub routes: Vec<RouteEntry>,
}

impl RouteConfig {
    /// Parse a TOML route-table file.
    pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
        let file: RouteFile = toml::from_str(src)?;
        let mode = match file.history.mode {
            ModeKey::Hash => HistoryMode::Hash,
            ModeKey::Path => HistoryMode::path(&file.history.base),
        };
        let not_found = match file.history.not_found {
            NotFoundKey::Blank => NotFoundPolicy::Blank,
            NotFoundKey::Home => NotFoundPolicy::RedirectHome,
        };
        Ok(Self {
            router: RouterConfig { mode, not_found },
            routes: file.routes,
        })
    }

    /// Entries that will be registered, in declaration order.
    pub fn enabled_routes(&self) -> impl Iterator<Item = &RouteEntry> {
        self.routes.iter().filter(|r| r.enabled)
    }

    /// Build a validated table, mapping each page key through `page`.
    ///
    /// Disabled entries are skipped before validation, so a disabled
    /// duplicate is not an error.
    pub fn build_table<P, F>(&self, page: F) -> Result<RouteTable<P>, ConfigError>
    where
        F: Fn(&str) -> Option<P>,
    {
        let mut routes = Vec::with_capacity(self.routes.len());
        for entry in self.enabled_routes() {
            let page = page(&entry.page).ok_or_else(|| ConfigError::UnknownPage {
                path: entry.path.clone(),
                page: entry.page.clone(),
            })?;
            let route = Route::new(&entry.path, page).map_err(RouteTableError::from)?;
            routes.push(match &entry.name {
                Some(name) => route.with_name(name.clone()),
                None => route,
            });
        }
        debug!(
            declared = self.routes.len(),
            enabled = routes.len(),
            "route config loaded"
        );
        Ok(RouteTable::new(routes)?)
    }
}

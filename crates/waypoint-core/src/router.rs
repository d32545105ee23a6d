//! The router: navigation state kept in step with the host history.
//!
//! # Architecture
//!
//! - **Host history is the source of truth**: the router writes hrefs into a
//!   [`HistoryBackend`] and re-reads it after `back`/`forward`/`sync`
//! - **State is owned, not global**: [`NavigationState`] lives inside the
//!   [`Router`] and only `navigate`, `sync` and the table edits replace it
//! - **Everything is synchronous**: each call runs to completion

use tracing::{debug, warn};

use crate::error::{NavigationError, ParamError, RouteTableError};
use crate::history::{HistoryBackend, HistoryMode};
use crate::location::Location;
use crate::route::{ActiveRoute, Params, Route};
use crate::table::{Resolution, RouteTable};

// ============================================================================
// Navigation inputs
// ============================================================================

/// Where to navigate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationTarget {
    /// A location string such as `/countdown?from=home`.
    Path(String),
    /// A named route, with parameters for its pattern.
    Named {
        name: String,
        params: Params,
        query: Option<String>,
    },
}

impl NavigationTarget {
    /// Target a named route with no parameters.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            params: Params::new(),
            query: None,
        }
    }

    /// Add a parameter to a named target. No effect on path targets.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Named { params, .. } = &mut self {
            params.insert(key, value);
        }
        self
    }

    /// Attach a raw query string to a named target. No effect on path targets.
    pub fn query(mut self, value: impl Into<String>) -> Self {
        if let Self::Named { query, .. } = &mut self {
            *query = Some(value.into());
        }
        self
    }
}

impl From<&str> for NavigationTarget {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for NavigationTarget {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

impl NavigateOptions {
    pub const PUSH: Self = Self { replace: false };
    pub const REPLACE: Self = Self { replace: true };
}

/// What to do when a location matches no route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotFoundPolicy {
    /// Keep the location with no active route; the mount point renders nothing.
    #[default]
    Blank,
    /// Replace the location with `/`.
    RedirectHome,
}

/// Router settings that come from deployment configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouterConfig {
    pub mode: HistoryMode,
    pub not_found: NotFoundPolicy,
}

/// Result of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// A route matched and the state changed.
    Navigated,
    /// Already at the requested location; nothing happened.
    Unchanged,
    /// No route matched; the location was kept with no active route.
    NotFound,
    /// No route matched; the router went home instead.
    Redirected,
}

// ============================================================================
// NavigationState
// ============================================================================

/// The current location and the route it resolved to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState<P> {
    location: Location,
    active: Option<ActiveRoute<P>>,
}

impl<P> NavigationState<P> {
    #[inline]
    pub fn location(&self) -> &Location {
        &self.location
    }

    #[inline]
    pub fn active(&self) -> Option<&ActiveRoute<P>> {
        self.active.as_ref()
    }

    /// Page of the active route, or `None` when the location is unmatched.
    pub fn page(&self) -> Option<&P> {
        self.active.as_ref().map(ActiveRoute::page)
    }

    pub fn route_name(&self) -> Option<&str> {
        self.active.as_ref().and_then(ActiveRoute::name)
    }

    /// A matched parameter of the active route.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.active.as_ref().and_then(|a| a.params.get(name))
    }

    #[inline]
    pub fn is_not_found(&self) -> bool {
        self.active.is_none()
    }
}

// ============================================================================
// Router
// ============================================================================

/// Resolves locations against a [`RouteTable`] and keeps a
/// [`NavigationState`] consistent with a [`HistoryBackend`].
#[derive(Debug)]
pub struct Router<P, H> {
    table: RouteTable<P>,
    config: RouterConfig,
    history: H,
    state: NavigationState<P>,
}

impl<P: Clone, H: HistoryBackend> Router<P, H> {
    /// Create the router and resolve the host's current location.
    pub fn new(table: RouteTable<P>, config: RouterConfig, history: H) -> Self {
        let location = config.mode.read(&history.location());
        let mut router = Self {
            state: NavigationState {
                location: Location::root(),
                active: None,
            },
            table,
            config,
            history,
        };
        router.enter(location);
        debug!(
            mode = router.config.mode.label(),
            location = %router.state.location,
            "router started"
        );
        router
    }

    /// Resolve a location path without navigating.
    pub fn resolve(&self, path: &str) -> Resolution<'_, P> {
        self.table.resolve(path)
    }

    /// Navigate to `target`, pushing or replacing a host history entry.
    pub fn navigate(
        &mut self,
        target: impl Into<NavigationTarget>,
        options: NavigateOptions,
    ) -> Result<NavigationOutcome, NavigationError> {
        let location = self.location_for(&target.into())?;
        if location == self.state.location {
            return Ok(NavigationOutcome::Unchanged);
        }

        let active = self.table.resolve(location.path()).into_active();
        let (location, active, outcome) = match active {
            Some(active) => (location, Some(active), NavigationOutcome::Navigated),
            None => {
                warn!(location = %location, "no route matches");
                match self.config.not_found {
                    NotFoundPolicy::Blank => (location, None, NavigationOutcome::NotFound),
                    NotFoundPolicy::RedirectHome => {
                        let home = Location::root();
                        if home == self.state.location {
                            return Ok(NavigationOutcome::Redirected);
                        }
                        let active = self.table.resolve(home.path()).into_active();
                        (home, active, NavigationOutcome::Redirected)
                    }
                }
            }
        };

        let href = self.config.mode.href(&location);
        if options.replace {
            self.history.replace(&href);
        } else {
            self.history.push(&href);
        }
        debug!(href = %href, replace = options.replace, ?outcome, "navigated");
        self.state = NavigationState { location, active };
        Ok(outcome)
    }

    /// Go one entry back in the host history. No-op at the first entry.
    pub fn back(&mut self) -> bool {
        self.history.go(-1);
        self.sync()
    }

    /// Go one entry forward in the host history. No-op at the last entry.
    pub fn forward(&mut self) -> bool {
        self.history.go(1);
        self.sync()
    }

    /// Re-read the host location after a host notification.
    ///
    /// Returns `true` if the navigation state changed.
    pub fn sync(&mut self) -> bool {
        let location = self.config.mode.read(&self.history.location());
        if location == self.state.location {
            return false;
        }
        self.enter(location);
        true
    }

    /// Render a target as an href for links.
    pub fn href(&self, target: impl Into<NavigationTarget>) -> Result<String, NavigationError> {
        let location = self.location_for(&target.into())?;
        Ok(self.config.mode.href(&location))
    }

    /// Append a route to the table and re-resolve the current location.
    pub fn add_route(&mut self, route: Route<P>) -> Result<(), RouteTableError> {
        self.table.add(route)?;
        self.refresh();
        Ok(())
    }

    /// Remove a route by name or path and re-resolve the current location.
    pub fn remove_route(&mut self, key: &str) -> Result<Route<P>, RouteTableError> {
        let route = self.table.remove(key)?;
        self.refresh();
        Ok(route)
    }

    #[inline]
    pub fn state(&self) -> &NavigationState<P> {
        &self.state
    }

    #[inline]
    pub fn table(&self) -> &RouteTable<P> {
        &self.table
    }

    #[inline]
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    #[inline]
    pub fn history(&self) -> &H {
        &self.history
    }

    fn location_for(&self, target: &NavigationTarget) -> Result<Location, NavigationError> {
        match target {
            NavigationTarget::Path(raw) => Ok(Location::parse(raw)),
            NavigationTarget::Named {
                name,
                params,
                query,
            } => {
                let route = self
                    .table
                    .by_name(name)
                    .ok_or_else(|| NavigationError::UnknownName(name.clone()))?;
                let path = route
                    .pattern()
                    .build(params)
                    .map_err(|err| match err {
                        ParamError::Missing(param) => NavigationError::MissingParam {
                            route: name.clone(),
                            param,
                        },
                        ParamError::Invalid { name: param, value } => {
                            NavigationError::InvalidParam {
                                route: name.clone(),
                                param,
                                value,
                            }
                        }
                    })?;
                let location = Location::parse(&path);
                Ok(match query {
                    Some(q) => location.with_query(q.clone()),
                    None => location,
                })
            }
        }
    }

    /// Adopt a location the host is already showing.
    fn enter(&mut self, location: Location) {
        let active = self.table.resolve(location.path()).into_active();
        if active.is_none() {
            warn!(location = %location, "no route matches");
            if self.config.not_found == NotFoundPolicy::RedirectHome {
                let home = Location::root();
                self.history.replace(&self.config.mode.href(&home));
                let active = self.table.resolve(home.path()).into_active();
                self.state = NavigationState {
                    location: home,
                    active,
                };
                return;
            }
        }
        self.state = NavigationState { location, active };
    }

    /// Re-resolve the current location after a table edit. Writes history
    /// only when the not-found policy redirects.
    fn refresh(&mut self) {
        self.enter(self.state.location.clone());
    }
}

//! The route table and location resolution.
//!
//! A [`RouteTable`] is plain data: an ordered list of [`Route`]s validated
//! once at construction. Resolution walks the list in declaration order and
//! the first structural match wins.

use tracing::{debug, info};

use crate::error::RouteTableError;
use crate::location::Location;
use crate::route::{ActiveRoute, Params, Route};

/// Result of resolving a location against a [`RouteTable`].
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub enum Resolution<'a, P> {
    /// The first route whose pattern matched, with captured parameters.
    Matched { route: &'a Route<P>, params: Params },
    /// No route matched.
    NotFound,
}

impl<'a, P> Resolution<'a, P> {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    pub fn route(&self) -> Option<&'a Route<P>> {
        match self {
            Self::Matched { route, .. } => Some(route),
            Self::NotFound => None,
        }
    }

    pub fn page(&self) -> Option<&'a P> {
        self.route().map(Route::page)
    }

    /// Detach the match from the table.
    pub fn into_active(self) -> Option<ActiveRoute<P>>
    where
        P: Clone,
    {
        match self {
            Self::Matched { route, params } => Some(ActiveRoute {
                route: route.clone(),
                params,
            }),
            Self::NotFound => None,
        }
    }
}

/// Ordered, validated collection of routes.
///
/// # Invariants
///
/// - Paths are unique (compared after normalization)
/// - Names are unique
/// - Exactly one literal `/` route exists (the home page)
#[derive(Clone, Debug)]
pub struct RouteTable<P> {
    routes: Vec<Route<P>>,
}

impl<P> RouteTable<P> {
    /// Build a table, failing on the first invariant violation.
    pub fn new(routes: Vec<Route<P>>) -> Result<Self, RouteTableError> {
        let mut table = Self {
            routes: Vec::with_capacity(routes.len()),
        };
        for route in routes {
            table.check_unique(&route)?;
            table.routes.push(route);
        }
        if !table.routes.iter().any(|r| r.pattern().is_root()) {
            return Err(RouteTableError::MissingHome);
        }

        info!(routes = table.routes.len(), "route table built");
        Ok(table)
    }

    /// Resolve a location path (query strings and trailing slashes are ignored).
    pub fn resolve(&self, path: &str) -> Resolution<'_, P> {
        let location = Location::parse(path);
        for route in &self.routes {
            if let Some(params) = route.pattern().matches(location.path()) {
                debug!(path = location.path(), route = %route, "resolved");
                return Resolution::Matched { route, params };
            }
        }
        Resolution::NotFound
    }

    /// Look up a route by name.
    pub fn by_name(&self, name: &str) -> Option<&Route<P>> {
        self.routes.iter().find(|r| r.name() == Some(name))
    }

    /// The home (`/`) route.
    pub fn home(&self) -> &Route<P> {
        self.routes
            .iter()
            .find(|r| r.pattern().is_root())
            .unwrap_or_else(|| unreachable!("route table invariant: home route present"))
    }

    /// All routes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Route<P>> {
        self.routes.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Append a route at the end of the table.
    pub fn add(&mut self, route: Route<P>) -> Result<(), RouteTableError> {
        self.check_unique(&route)?;
        info!(route = %route, "route added");
        self.routes.push(route);
        Ok(())
    }

    /// Remove the route addressed by `key` (a route name or path).
    ///
    /// The home route cannot be removed.
    pub fn remove(&mut self, key: &str) -> Result<Route<P>, RouteTableError> {
        let index = self
            .routes
            .iter()
            .position(|r| r.is_addressed_by(key))
            .ok_or_else(|| RouteTableError::UnknownRoute(key.to_string()))?;
        if self.routes[index].pattern().is_root() {
            return Err(RouteTableError::HomeRemoval);
        }
        let route = self.routes.remove(index);
        info!(route = %route, "route removed");
        Ok(route)
    }

    fn check_unique(&self, route: &Route<P>) -> Result<(), RouteTableError> {
        if self
            .routes
            .iter()
            .any(|r| r.pattern().same_shape(route.pattern()))
        {
            return Err(RouteTableError::DuplicatePath(route.path()));
        }
        if let Some(name) = route.name()
            && self.by_name(name).is_some()
        {
            return Err(RouteTableError::DuplicateName(name.to_string()));
        }
        Ok(())
    }
}

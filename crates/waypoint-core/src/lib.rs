//! Host-independent client-side routing.
//!
//! - [`RouteTable`], [`Route`], [`RoutePattern`] - validated route data and matching
//! - [`Router`], [`NavigationState`] - navigation kept in step with a host history
//! - [`HistoryMode`], [`HistoryBackend`], [`MemoryHistory`] - hash or path addressing
//! - [`RouteConfig`] - route tables loaded from TOML
//!
//! ```
//! use waypoint_core::{MemoryHistory, NavigateOptions, Route, RouteTable, Router, RouterConfig};
//!
//! let table = RouteTable::new(vec![
//!     Route::named("/", "Home", "home").unwrap(),
//!     Route::named("/countdown", "Countdown", "countdown").unwrap(),
//! ])
//! .unwrap();
//!
//! let mut router = Router::new(table, RouterConfig::default(), MemoryHistory::default());
//! router.navigate("/countdown", NavigateOptions::PUSH).unwrap();
//! assert_eq!(router.state().page(), Some(&"countdown"));
//! ```

pub mod config;
pub mod error;
mod history;
mod location;
mod pattern;
mod route;
mod router;
mod table;

pub use config::{RouteConfig, RouteEntry};
pub use error::{ConfigError, NavigationError, ParamError, PatternError, RouteTableError};
pub use history::{HistoryBackend, HistoryMode, HostLocation, MemoryHistory};
pub use location::Location;
pub use pattern::RoutePattern;
pub use route::{ActiveRoute, Params, Route};
pub use router::{
    NavigateOptions, NavigationOutcome, NavigationState, NavigationTarget, NotFoundPolicy, Router,
    RouterConfig,
};
pub use table::{Resolution, RouteTable};

//! Error types for the routing core.
//!
//! - [`PatternError`] - a route path that cannot be parsed
//! - [`ParamError`] - parameter values that cannot fill a pattern
//! - [`RouteTableError`] - a route table that violates its invariants
//! - [`NavigationError`] - a navigation target that cannot be turned into a location
//! - [`ConfigError`] - a route-table file that cannot be loaded
//!
//! An unmatched location is not an error: resolution reports it as
//! [`Resolution::NotFound`](crate::Resolution::NotFound).

use thiserror::Error;

/// Errors raised while parsing a route path pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Pattern does not start with `/`.
    #[error("route path '{0}' must start with '/'")]
    MissingLeadingSlash(String),
    /// A `:` segment without a parameter name.
    #[error("route path '{0}' has a parameter without a name")]
    EmptyParamName(String),
    /// Parameter name contains something other than alphanumerics and `_`.
    #[error("route path '{pattern}' has an invalid parameter name '{name}'")]
    InvalidParamName { pattern: String, name: String },
    /// Optional or catch-all segment that is not the last one.
    #[error("route path '{0}' has an optional or catch-all parameter before the last segment")]
    TrailingOnly(String),
    /// The same parameter name used twice.
    #[error("route path '{pattern}' repeats parameter '{name}'")]
    RepeatedParam { pattern: String, name: String },
}

/// Errors raised while filling a pattern's parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("missing parameter '{0}'")]
    Missing(String),
    #[error("parameter '{name}' cannot take the value '{value}'")]
    Invalid { name: String, value: String },
}

/// Route table construction errors.
///
/// These are configuration errors: they are detected when the table is
/// built, never during navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteTableError {
    #[error(transparent)]
    InvalidPattern(#[from] PatternError),
    #[error("duplicate route path '{0}'")]
    DuplicatePath(String),
    #[error("duplicate route name '{0}'")]
    DuplicateName(String),
    #[error("route table has no home route ('/')")]
    MissingHome,
    #[error("the home route ('/') cannot be removed")]
    HomeRemoval,
    #[error("no route with name or path '{0}'")]
    UnknownRoute(String),
}

/// Errors raised while building a location from a navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no route named '{0}'")]
    UnknownName(String),
    #[error("route '{route}' requires parameter '{param}'")]
    MissingParam { route: String, param: String },
    #[error("route '{route}' cannot put '{value}' in parameter '{param}'")]
    InvalidParam {
        route: String,
        param: String,
        value: String,
    },
}

/// Errors raised while loading a route table from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse route config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown page '{page}' for route '{path}'")]
    UnknownPage { path: String, page: String },
    #[error(transparent)]
    Table(#[from] RouteTableError),
}

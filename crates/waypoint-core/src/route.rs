//! Route entries and matched parameters.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::PatternError;
use crate::pattern::RoutePattern;

/// Parameters captured from a location path, keyed by parameter name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A route: a path pattern mapped to a page, with an optional unique name.
///
/// `P` is whatever the consumer uses to identify a renderable page. The
/// router never inspects it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route<P> {
    pattern: RoutePattern,
    name: Option<String>,
    page: P,
}

impl<P> Route<P> {
    /// Create an unnamed route.
    pub fn new(path: &str, page: P) -> Result<Self, PatternError> {
        Ok(Self {
            pattern: RoutePattern::parse(path)?,
            name: None,
            page,
        })
    }

    /// Create a named route.
    pub fn named(path: &str, name: impl Into<String>, page: P) -> Result<Self, PatternError> {
        Ok(Self::new(path, page)?.with_name(name))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[inline]
    pub fn pattern(&self) -> &RoutePattern {
        &self.pattern
    }

    /// Normalized path pattern (e.g. `/countdown`).
    pub fn path(&self) -> String {
        self.pattern.to_string()
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub fn page(&self) -> &P {
        &self.page
    }

    /// True if this route is addressed by `key` (its name or its path).
    pub fn is_addressed_by(&self, key: &str) -> bool {
        self.name() == Some(key) || RoutePattern::parse(key).is_ok_and(|p| p == self.pattern)
    }
}

impl<P> fmt::Display for Route<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ({})", self.pattern, name),
            None => write!(f, "{}", self.pattern),
        }
    }
}

/// A route together with the parameters captured while matching it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveRoute<P> {
    pub route: Route<P>,
    pub params: Params,
}

impl<P> ActiveRoute<P> {
    #[inline]
    pub fn page(&self) -> &P {
        self.route.page()
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.route.name()
    }
}

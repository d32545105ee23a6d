//! History addressing policies and the host history contract.
//!
//! # Architecture
//!
//! - [`HostLocation`] is what the host exposes: `pathname`, `search`, `hash`
//! - [`HistoryMode`] decides where the application [`Location`] lives in it
//!   (after the `#`, or in the path below a base)
//! - [`HistoryBackend`] is the host's history stack; the router never keeps
//!   its own
//! - [`MemoryHistory`] is a host-less backend for tests and offline tools

use crate::location::{Location, normalize_path};

// ============================================================================
// HostLocation
// ============================================================================

/// A location as seen by the host environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostLocation {
    /// Path portion of the URL, e.g. `/app/countdown`.
    pub pathname: String,
    /// Query portion including the leading `?`, or empty.
    pub search: String,
    /// Fragment including the leading `#`, or empty.
    pub hash: String,
}

impl HostLocation {
    /// Split a URL (without scheme and host) into its parts.
    pub fn parse(url: &str) -> Self {
        let (rest, hash) = match url.find('#') {
            Some(i) => (&url[..i], &url[i..]),
            None => (url, ""),
        };
        let (pathname, search) = match rest.find('?') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, ""),
        };
        Self {
            pathname: if pathname.is_empty() {
                "/".to_string()
            } else {
                pathname.to_string()
            },
            search: search.to_string(),
            hash: hash.to_string(),
        }
    }

    /// The location reached by following `href` from this one.
    ///
    /// A fragment-only href keeps the current path and query.
    pub fn join(&self, href: &str) -> Self {
        if href.starts_with('#') {
            Self {
                hash: href.to_string(),
                ..self.clone()
            }
        } else {
            Self::parse(href)
        }
    }
}

impl std::fmt::Display for HostLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.pathname, self.search, self.hash)
    }
}

// ============================================================================
// HistoryMode
// ============================================================================

/// How the application location is encoded in the host URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HistoryMode {
    /// Location after the `#`: `/index.html#/countdown`.
    #[default]
    Hash,
    /// Location in the path below `base`: `/app/countdown`.
    ///
    /// The server must answer every such path with the entry page.
    Path { base: String },
}

impl HistoryMode {
    /// Path-based addressing below `base` (normalized, `/` for none).
    pub fn path(base: &str) -> Self {
        Self::Path {
            base: normalize_path(base),
        }
    }

    /// Read the application location out of a host location.
    pub fn read(&self, host: &HostLocation) -> Location {
        match self {
            Self::Hash => Location::parse(host.hash.trim_start_matches('#')),
            Self::Path { base } => {
                let path = strip_base(&host.pathname, base);
                let query = host.search.trim_start_matches('?');
                Location::parse(path).with_query(query)
            }
        }
    }

    /// Render an application location as an href for the host history.
    pub fn href(&self, location: &Location) -> String {
        match self {
            Self::Hash => format!("#{}", location),
            Self::Path { base } if base == "/" => location.to_string(),
            Self::Path { base } if location.path() == "/" => match location.query() {
                Some(q) => format!("{}/?{}", base, q),
                None => format!("{}/", base),
            },
            Self::Path { base } => format!("{}{}", base, location),
        }
    }

    /// Short label for logs and CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hash => "hash",
            Self::Path { .. } => "path",
        }
    }
}

fn strip_base<'a>(pathname: &'a str, base: &str) -> &'a str {
    if base == "/" {
        return pathname;
    }
    match pathname.strip_prefix(base) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => pathname,
    }
}

// ============================================================================
// HistoryBackend
// ============================================================================

/// The host environment's history stack.
///
/// `push` and `replace` take hrefs produced by [`HistoryMode::href`].
/// `go` with a delta that leaves the stack does nothing.
pub trait HistoryBackend {
    fn location(&self) -> HostLocation;
    fn push(&mut self, href: &str);
    fn replace(&mut self, href: &str);
    fn go(&mut self, delta: isize);
}

// ============================================================================
// MemoryHistory
// ============================================================================

/// In-memory history stack with the same semantics as a browser tab.
#[derive(Clone, Debug)]
pub struct MemoryHistory {
    entries: Vec<HostLocation>,
    index: usize,
}

impl MemoryHistory {
    /// Start with a single entry at `url`.
    pub fn new(url: &str) -> Self {
        Self {
            entries: vec![HostLocation::parse(url)],
            index: 0,
        }
    }

    /// Number of entries in the stack.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the current entry.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl HistoryBackend for MemoryHistory {
    fn location(&self) -> HostLocation {
        self.entries[self.index].clone()
    }

    fn push(&mut self, href: &str) {
        let next = self.entries[self.index].join(href);
        self.entries.truncate(self.index + 1);
        self.entries.push(next);
        self.index += 1;
    }

    fn replace(&mut self, href: &str) {
        let next = self.entries[self.index].join(href);
        self.entries[self.index] = next;
    }

    fn go(&mut self, delta: isize) {
        if let Some(target) = self.index.checked_add_signed(delta)
            && target < self.entries.len()
        {
            self.index = target;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_location_parse() {
        let host = HostLocation::parse("/app/index.html?x=1#/countdown");
        assert_eq!(host.pathname, "/app/index.html");
        assert_eq!(host.search, "?x=1");
        assert_eq!(host.hash, "#/countdown");
        assert_eq!(host.to_string(), "/app/index.html?x=1#/countdown");
        assert_eq!(HostLocation::parse("").pathname, "/");
    }

    #[test]
    fn test_hash_mode() {
        let mode = HistoryMode::Hash;
        assert_eq!(mode.read(&HostLocation::parse("/")).path(), "/");
        assert_eq!(mode.read(&HostLocation::parse("/#")).path(), "/");
        assert_eq!(mode.read(&HostLocation::parse("/#/countdown")).path(), "/countdown");
        let loc = mode.read(&HostLocation::parse("/?ignored=1#/slots?bet=2"));
        assert_eq!(loc.to_string(), "/slots?bet=2");
        assert_eq!(mode.href(&Location::parse("/slots")), "#/slots");
        assert_eq!(mode.href(&Location::root()), "#/");
    }

    #[test]
    fn test_path_mode() {
        let root = HistoryMode::path("/");
        assert_eq!(root.read(&HostLocation::parse("/countdown?x=1")).to_string(), "/countdown?x=1");
        assert_eq!(root.href(&Location::parse("/countdown")), "/countdown");

        let mode = HistoryMode::path("/app/");
        assert_eq!(mode, HistoryMode::Path { base: "/app".to_string() });
        assert_eq!(mode.read(&HostLocation::parse("/app")).path(), "/");
        assert_eq!(mode.read(&HostLocation::parse("/app/slots")).path(), "/slots");
        // Outside the base the path is read as-is
        assert_eq!(mode.read(&HostLocation::parse("/apple")).path(), "/apple");
        assert_eq!(mode.href(&Location::parse("/slots")), "/app/slots");
        assert_eq!(mode.href(&Location::root()), "/app/");
        assert_eq!(mode.href(&Location::root().with_query("a=1")), "/app/?a=1");
    }

    #[test]
    fn test_memory_history_stack() {
        let mut history = MemoryHistory::new("/index.html");
        history.push("#/countdown");
        history.push("#/slots");
        assert_eq!(history.len(), 3);
        assert_eq!(history.location().to_string(), "/index.html#/slots");

        history.go(-1);
        assert_eq!(history.location().hash, "#/countdown");

        // Pushing drops the forward entries
        history.push("#/");
        assert_eq!(history.len(), 3);
        history.go(1);
        assert_eq!(history.location().hash, "#/");

        history.replace("/other");
        assert_eq!(history.location().to_string(), "/other");
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_memory_history_go_out_of_range() {
        let mut history = MemoryHistory::default();
        history.go(-1);
        assert_eq!(history.index(), 0);
        history.push("/a");
        history.go(5);
        assert_eq!(history.index(), 1);
        history.go(-2);
        assert_eq!(history.index(), 1);
    }
}

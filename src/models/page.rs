//! Page registry: the renderable units route tables point at.

/// A page the router can mount.
///
/// Route tables refer to pages by key (`page = "countdown"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Countdown,
    Slots,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Countdown, Page::Slots];

    /// Look up a page by its route-table key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    /// Key used in route tables.
    pub fn key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Countdown => "countdown",
            Self::Slots => "slots",
        }
    }

    /// Title shown in navigation and the document title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Countdown => "Countdown",
            Self::Slots => "Slots",
        }
    }
}

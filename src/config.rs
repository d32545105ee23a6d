//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The route table is loaded at compile time using `include_str!`.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the navigation bar and document title.
pub const APP_NAME: &str = "waypoint";

/// Id of the element the application mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

// =============================================================================
// Routing
// =============================================================================

/// Route table for this deployment (see `assets/routes.toml`).
pub const ROUTES_TOML: &str = include_str!("../assets/routes.toml");

// =============================================================================
// Logging
// =============================================================================

/// Most verbose level forwarded to the browser console.
pub const LOG_LEVEL: tracing::Level = tracing::Level::DEBUG;

// =============================================================================
// Pages
// =============================================================================

/// Countdown page settings.
pub mod countdown {
    /// Seconds on the clock when the page mounts or is reset.
    pub const START_SECONDS: u32 = 10;
    /// Tick interval in milliseconds.
    pub const TICK_MS: u32 = 1000;
}

/// Slots page settings.
pub mod slots {
    /// Symbols on each reel.
    pub const SYMBOLS: &[&str] = &["7", "BAR", "BELL", "CHERRY", "LEMON"];
    /// Number of reels.
    pub const REELS: usize = 3;
}

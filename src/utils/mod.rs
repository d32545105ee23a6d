//! Utility modules for browser access and logging.
//!
//! Provides:
//! - [`BrowserHistory`] - host history backend over `window.history`
//! - [`log`] - `tracing` subscriber writing to the browser console

pub mod dom;
pub mod log;

pub use dom::BrowserHistory;

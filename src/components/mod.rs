//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`pages`] - Pages mounted by the router

pub mod pages;
pub mod router;

pub use router::{AppRouter, BrowserRouter};

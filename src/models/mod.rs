//! Data models for the application.
//!
//! - [`Page`] - pages that route tables can point at

mod page;

pub use page::Page;

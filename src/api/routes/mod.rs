//! Route handlers for the REST API
//!
//! Handlers are organized by domain:
//! - [`chapters`] - Chapter listing, merged chapters, translation corpus
//! - [`system`] - Health, OpenAPI

mod chapters;
mod system;

// Re-export all handlers so `routes::function_name` works in the router
pub use chapters::*;
pub use system::*;

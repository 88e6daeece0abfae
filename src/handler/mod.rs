//! Request handler module
//!
//! Routing dispatch and the two handlers behind it: the greeting catch-all
//! and the static file responder.

pub mod router;
pub mod static_files;

// Re-export the main entry points
pub use router::{handle_request, RouteHandler, Router, GREETING};

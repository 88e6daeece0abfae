//! HTTP protocol layer module
//!
//! Content-type inference and response builders, decoupled from routing and
//! file-system concerns.

pub mod mime;
pub mod response;

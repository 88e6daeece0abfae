//! A minimal HTTP server: a fixed plain-text greeting on every path, except
//! `/static/`, which serves files from a local directory.
//!
//! The binary wires [`config::Config`] (port from the first CLI argument),
//! a [`handler::Router`] built at startup, and a [`server::Server`] owning
//! its listener. Each piece can also be constructed independently, which is
//! how the integration tests spin up servers on ephemeral ports.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;

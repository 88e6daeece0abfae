//! Server configuration
//!
//! Resolved exactly once at startup, before the listener binds, and immutable
//! for the process lifetime. The only external input is the optional first
//! command-line argument (the listening port); there are no flags, no config
//! files, and no environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8080";
const DEFAULT_STATIC_ROOT: &str = "static";

#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind; all interfaces, matching the original behavior.
    pub host: String,
    /// Listening port, kept as the raw argument text. Deliberately
    /// unvalidated: a bad value fails at address parse time and takes the
    /// startup-failure path.
    pub port: String,
    /// Directory files are served from under `/static/`, relative to the
    /// working directory. Not validated at startup; read at request time.
    pub static_root: PathBuf,
}

impl Config {
    /// Resolve configuration from the process arguments (without argv[0]).
    /// The first argument, if present and non-empty, overrides the port.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Self {
        let port = match args.next() {
            Some(arg) if !arg.is_empty() => arg,
            _ => DEFAULT_PORT.to_string(),
        };

        Self {
            host: DEFAULT_HOST.to_string(),
            port,
            static_root: PathBuf::from(DEFAULT_STATIC_ROOT),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid listen address {}:{}: {e}", self.host, self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_args(std::iter::empty())
    }
}

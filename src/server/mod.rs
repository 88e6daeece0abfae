//! Server module
//!
//! A self-contained server value owning its listener and route table.
//! Multiple independent instances can run in one process, which is how the
//! integration tests exercise it on ephemeral ports.

pub mod listener;

use crate::handler::router::{handle_request, Router};
use crate::logger;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;

pub struct Server {
    listener: tokio::net::TcpListener,
    router: Arc<Router>,
}

impl Server {
    /// Bind the listener and take ownership of the route table.
    ///
    /// Must be called from within a Tokio runtime (the listener is
    /// registered with the reactor on creation).
    pub fn bind(addr: SocketAddr, router: Router) -> std::io::Result<Self> {
        let listener = listener::bind_listener(addr)?;
        Ok(Self {
            listener,
            router: Arc::new(router),
        })
    }

    /// The address actually bound, needed when binding port 0.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept loop: one spawned task per connection, no limits, no timeouts.
    /// Runs until the process is terminated; accept errors are logged and
    /// the loop continues.
    pub async fn run(self) -> std::io::Result<()> {
        loop {
            match self.listener.accept().await {
                Ok((stream, peer_addr)) => {
                    logger::log_connection_accepted(&peer_addr);
                    let router = Arc::clone(&self.router);
                    tokio::spawn(async move {
                        serve_connection(stream, peer_addr, router).await;
                    });
                }
                Err(e) => {
                    logger::log_error(&format!("Failed to accept connection: {e}"));
                }
            }
        }
    }
}

/// Serve a single connection over HTTP/1.1.
async fn serve_connection(stream: TcpStream, peer_addr: SocketAddr, router: Arc<Router>) {
    let io = TokioIo::new(stream);

    let service = service_fn(move |req| {
        let router = Arc::clone(&router);
        async move { handle_request(req, peer_addr, router).await }
    });

    if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
        logger::log_connection_error(&err);
    }
}

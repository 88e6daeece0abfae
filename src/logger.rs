use crate::config::Config;
use chrono::Local;
use hyper::{Method, StatusCode, Version};
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Server started successfully");
    println!("Listening on: http://{addr}");
    println!("Static root: {}", config.static_root.display());
    println!("Using Tokio runtime for concurrency");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_request(method: &Method, path: &str, version: Version, peer_addr: &SocketAddr) {
    println!(
        "[{}] [Request] {} \"{} {} {:?}\"",
        Local::now().format("%d/%b/%Y:%H:%M:%S %z"),
        peer_addr,
        method,
        path,
        version
    );
}

pub fn log_response(status: StatusCode, size: u64) {
    println!("[Response] {status} ({size} bytes)");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_bind_failed(addr: &SocketAddr, err: &std::io::Error) {
    eprintln!("[ERROR] Failed to bind {addr}: {err}");
}

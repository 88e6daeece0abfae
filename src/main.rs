use std::process;
use tinyhttpd::config::Config;
use tinyhttpd::handler::router::Router;
use tinyhttpd::logger;
use tinyhttpd::server::Server;

fn main() {
    let cfg = Config::from_args(std::env::args().skip(1));

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            logger::log_error(&format!("Failed to build runtime: {e}"));
            process::exit(1);
        }
    };

    // A server that failed to start has nothing left to do: exit non-zero
    // instead of falling through.
    if runtime.block_on(async_main(cfg)).is_err() {
        process::exit(1);
    }
}

async fn async_main(cfg: Config) -> Result<(), ()> {
    let addr = cfg.socket_addr().map_err(|e| logger::log_error(&e))?;

    let router = Router::new(cfg.static_root.clone());
    let server = Server::bind(addr, router).map_err(|e| logger::log_bind_failed(&addr, &e))?;

    logger::log_server_start(&addr, &cfg);

    server
        .run()
        .await
        .map_err(|e| logger::log_error(&format!("Server loop failed: {e}")))
}

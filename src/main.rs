mod config;
mod http;
mod routes;
mod server;

use std::sync::Arc;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Arc::new(Config::load()?);

    let state = cfg.clone();
    let handler = move |ctx: http::context::Context| routes::handle(state.clone(), ctx);

    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
        tracing::info!("Shutdown signal received");
    };

    server::listener::run(&cfg.server.listen_addr, handler, shutdown).await
}

use anyhow::Context;
use ihub::kernel::config::load_config;
use ihub::kernel::prelude::ApiConfig;
use ihub_logger::Logger;
use ihub_runtime::RuntimeConfig;
use ihub_server::Server;

fn main() -> anyhow::Result<()> {
    let runtime = ihub_runtime::build_runtime_with_config(&RuntimeConfig::high_performance())?;
    runtime.block_on(serve())
}

async fn serve() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    let mut cfg: ApiConfig =
        load_config(Some("server")).context("Critical: Configuration is malformed")?;

    // Platform-assigned port (Railway and friends) wins over file config.
    if let Ok(port) = std::env::var("PORT") {
        cfg.server.port = port.parse().context("PORT must be a valid port number")?;
    }

    Server::builder().config(cfg).build()?.run().await
}

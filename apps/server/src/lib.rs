//! # IconHub Server
//!
//! The HTTP server binary for the icon/flag catalog: `Axum` routing over the
//! feature slices, OpenAPI docs, and graceful shutdown.
//!
//! ## Example
//! ```no_run
//! use ihub_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(8000)
//!         .build()?
//!         .run()
//!         .await
//! }
//! ```

mod router;

use anyhow::{Context, Result, anyhow};
use axum_server::Handle;
use ihub::kernel::prelude::{ApiConfig, ApiState};
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

/// A fluent builder for configuring and initializing the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: ApiConfig,
}

impl ServerBuilder {
    /// Set up the server's configuration.
    pub fn config(mut self, cfg: ApiConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    /// Consumes the builder and initializes the server.
    ///
    /// # Process
    /// 1. Initializes the feature slices (which create the asset directories)
    /// 2. Collects the build-time capability set
    /// 3. Constructs application state
    ///
    /// # Errors
    /// Returns an error if a feature slice fails to initialize (e.g. an
    /// asset directory cannot be created) or the state registry is invalid.
    pub fn build(self) -> Result<Server> {
        let address = SocketAddr::new(self.cfg.server.address, self.cfg.server.port);

        info!(
            address = %address,
            "Initializing server"
        );

        let slices =
            ihub::init(&self.cfg).map_err(|e| anyhow!("Platform bootstrap failed: {e}"))?;

        let state = slices
            .into_iter()
            .fold(
                ApiState::builder().config(self.cfg).capabilities(ihub::capabilities()),
                |builder, slice| builder.register_slice(slice),
            )
            .build()
            .context("Failed to finalize API state registry")?;

        Ok(Server { state })
    }
}

/// A fully initialized server instance ready to run.
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: ApiState,
}

impl Server {
    /// Returns a new [`ServerBuilder`] to configure the server.
    ///
    /// This is the recommended way to initialize the server.
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// Starts the server and runs until the shutdown signal is received.
    ///
    /// # Errors
    /// Returns an error if the server fails to bind to the configured
    /// address.
    pub async fn run(self) -> Result<()> {
        let cfg = self.state.config.clone();
        let address = SocketAddr::new(cfg.server.address, cfg.server.port);

        let app = router::init(self.state);

        // Graceful shutdown wiring
        let handle = Handle::<SocketAddr>::new();
        let shutdown_handle = handle.clone();

        tokio::spawn(async move {
            if let Err(e) = shutdown_signal().await {
                error!("Error while waiting for shutdown signal: {e}");
                return;
            }
            info!("Shutdown signal received, starting graceful shutdown...");
            shutdown_handle.graceful_shutdown(Some(std::time::Duration::from_secs(30)));
        });

        info!("Starting HTTP server on http://{address}");

        axum_server::bind(address)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .context("HTTP server failed")?;

        info!("Server shutdown complete");
        Ok(())
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub const fn state(&self) -> &ApiState {
        &self.state
    }
}

/// Listens for shutdown signals (Ctrl+C, SIGTERM).
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => {
            res.context("Ctrl+C signal received")?;
        },
        res = terminate => {
            res.context("SIGTERM signal received")?;
        },
    }

    Ok(())
}

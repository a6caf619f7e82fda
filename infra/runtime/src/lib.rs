//! # Runtime
//!
//! A thin orchestration layer over the [Tokio](https://tokio.rs) runtime.
//!
//! The workspace builds its runtime through the profiles here instead of
//! `#[tokio::main]` so worker counts, stack sizes, and thread naming stay
//! consistent and overridable via `TOKIO_WORKER_THREADS`.

pub use anyhow::Result;

use anyhow::anyhow;
use std::{sync::OnceLock, thread::available_parallelism, time::Duration};
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

/// The default number of worker threads if detection fails.
const DEFAULT_WORKER_THREADS: usize = 4;
/// The default stack size for threads (3 `MiB`).
const DEFAULT_STACK_SIZE: usize = 3 * 1024 * 1024;
/// Minimum allowed stack size (1 `MiB`).
const MIN_STACK_SIZE: usize = 1024 * 1024;
/// Maximum allowed stack size (16 `MiB`).
const MAX_STACK_SIZE: usize = 16 * 1024 * 1024;
/// How long an idle thread stays alive.
const THREAD_KEEP_ALIVE: Duration = Duration::from_secs(60);

static WORKER_THREADS: OnceLock<usize> = OnceLock::new();

/// Detects the optimal number of worker threads based on environment variables or hardware.
fn get_worker_threads() -> usize {
    *WORKER_THREADS.get_or_init(|| {
        std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| n > 0 && n <= 1024)
            .unwrap_or_else(|| {
                available_parallelism()
                    .map(std::num::NonZero::get)
                    .unwrap_or(DEFAULT_WORKER_THREADS)
            })
    })
}

fn validate_stack_size(stack_size: usize) -> usize {
    stack_size.clamp(MIN_STACK_SIZE, MAX_STACK_SIZE)
}

/// Configuration for the Tokio runtime.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub worker_threads: usize,
    pub stack_size: usize,
    pub thread_name: String,
    pub thread_keep_alive: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            worker_threads: get_worker_threads(),
            stack_size: DEFAULT_STACK_SIZE,
            thread_name: "thread-worker".to_owned(),
            thread_keep_alive: THREAD_KEEP_ALIVE,
        }
    }
}

impl RuntimeConfig {
    /// Preset for the server: larger stacks, longer keep-alive.
    #[must_use = "Use this configuration for high-performance server applications"]
    pub fn high_performance() -> Self {
        Self {
            worker_threads: get_worker_threads(),
            stack_size: 4 * 1024 * 1024,
            thread_name: "thread-hp".to_owned(),
            thread_keep_alive: Duration::from_secs(300),
        }
    }

    #[must_use = "Customize the number of worker threads for the runtime"]
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = threads.clamp(1, 1024);
        self
    }

    #[must_use = "Customize the stack size for worker threads"]
    pub fn with_stack_size(mut self, size: usize) -> Self {
        self.stack_size = validate_stack_size(size);
        self
    }
}

/// Creates a new multithreaded Tokio runtime from a [`RuntimeConfig`].
///
/// All Tokio features (I/O, timers, signals) are enabled.
///
/// # Errors
/// Returns an error if the OS refuses to set up the runtime (thread
/// creation limits, resource exhaustion).
pub fn build_runtime_with_config(config: &RuntimeConfig) -> Result<Runtime> {
    debug!(config = ?config, "Building tokio runtime");

    let mut builder = Builder::new_multi_thread();
    builder
        .worker_threads(config.worker_threads.clamp(1, 1024))
        .thread_name(&config.thread_name)
        .thread_stack_size(validate_stack_size(config.stack_size))
        .thread_keep_alive(config.thread_keep_alive);

    builder.enable_all();

    builder.build().map_err(|e| anyhow!("Failed to initialize runtime: {e}"))
}

/// Convenience wrapper building a runtime with the default configuration.
///
/// # Errors
/// See [`build_runtime_with_config`].
pub fn build_service_runtime() -> Result<Runtime> {
    build_runtime_with_config(&RuntimeConfig::default())
}

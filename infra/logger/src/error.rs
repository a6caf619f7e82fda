/// Errors that can occur during logger initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Failure when configuring the rolling file appender (e.g., invalid path).
    #[error("rolling file appender error: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),

    /// Occurs if a global tracing subscriber has already been initialized in the current process.
    #[error("tracing subscriber error: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),

    /// Failure while preparing the log directory.
    #[error("log directory error at {path}: {source}")]
    Directory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration supplied to the logger builder.
    #[error("invalid logger configuration: {0}")]
    InvalidConfiguration(String),
}

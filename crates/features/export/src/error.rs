use ihub_kernel::security::asset::AssetGuardError;
use ihub_kernel::server::reply::ErrorReply;

/// Error types specific to the export feature.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("unknown asset kind: {given}")]
    InvalidKind { given: String },

    #[error("asset not found: {name}")]
    NotFound { name: String },

    #[error("rasterizer not compiled in")]
    Unavailable,

    #[error("rasterization failed: {message}")]
    Render { message: String },

    #[error("asset name rejected: {source}")]
    Guard {
        #[from]
        source: AssetGuardError,
    },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl From<ExportError> for ErrorReply {
    fn from(err: ExportError) -> Self {
        let message = match &err {
            ExportError::InvalidKind { .. } => "Invalid type".to_owned(),
            ExportError::NotFound { .. } | ExportError::Guard { .. } => "File not found".to_owned(),
            ExportError::Unavailable => {
                "PNG export not available. The server was built without the svg_raster feature."
                    .to_owned()
            }
            ExportError::Render { message } => format!("Failed to convert to PNG: {message}"),
            other => other.to_string(),
        };
        Self::new(message)
    }
}

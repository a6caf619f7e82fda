use ihub_kernel::security::asset::AssetGuardError;
use ihub_kernel::server::reply::ErrorReply;

/// Error types specific to the catalog feature.
///
/// `Display` carries the diagnostic detail for logs; the client-facing
/// envelope collapses each variant to the canonical wire message in
/// [`ErrorReply::from`].
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown asset kind: {given}")]
    InvalidKind { given: String },

    #[error("asset not found: {name}")]
    NotFound { name: String },

    #[error("group not found: {id}")]
    GroupNotFound { id: String },

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

    #[error("malformed SVG: {source}")]
    Parse {
        #[from]
        source: roxmltree::Error,
    },

    #[error("XML error: {source}")]
    Xml {
        #[from]
        source: quick_xml::Error,
    },

    #[error("XML attribute error: {source}")]
    XmlAttr {
        #[from]
        source: quick_xml::events::attributes::AttrError,
    },

    #[error("XML escape error: {source}")]
    Escape {
        #[from]
        source: quick_xml::escape::EscapeError,
    },
}

impl From<CatalogError> for ErrorReply {
    fn from(err: CatalogError) -> Self {
        let message = match &err {
            CatalogError::InvalidKind { .. } => "Invalid type".to_owned(),
            // Rejected names behave exactly like absent files on the wire.
            CatalogError::NotFound { .. } | CatalogError::Guard { .. } => "File not found".to_owned(),
            CatalogError::GroupNotFound { .. } => "Group not found".to_owned(),
            other => other.to_string(),
        };
        Self::new(message)
    }
}

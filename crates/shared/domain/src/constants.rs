//! Shared string constants used across slices and the API layer.

/// OpenAPI tag for system endpoints (health).
pub const SYSTEM_TAG: &str = "System";
/// OpenAPI tag for catalog endpoints (listing, groups, recolor).
pub const CATALOG_TAG: &str = "Catalog";
/// OpenAPI tag for export endpoints.
pub const EXPORT_TAG: &str = "Export";

/// File extension handled by the catalog.
pub const SVG_EXTENSION: &str = "svg";

/// Group-id sentinel meaning "recolor the whole document" (flags only).
pub const ENTIRE_DOCUMENT_GROUP: &str = "entire_flag";

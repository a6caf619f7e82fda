use serde::Serialize;

/// Optional abilities of a running server instance.
///
/// Mirrors what was compiled in, not configuration: a deployment without the
/// rasterizer still serves every other endpoint and reports `raster: false`
/// from the health check.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Capabilities {
    /// SVG→PNG rasterization is available.
    pub raster: bool,
}

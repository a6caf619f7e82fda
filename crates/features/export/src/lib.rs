//! # Export feature slice
//!
//! Rasterizes catalog SVGs to PNG on demand. The rasterizer (resvg) is an
//! optional dependency gated behind the `svg_raster` cargo feature; a build
//! without it keeps the endpoint but reports the capability as unavailable,
//! and the health check exposes the same flag.

mod error;
mod handlers;
mod raster;

pub use crate::error::ExportError;
pub use crate::handlers::router;

use ihub_domain::asset::AssetKind;
use ihub_domain::config::ApiConfig;
use ihub_domain::registry::{FeatureSlice, InitializedSlice};
use ihub_kernel::security::asset::AssetGuard;
use std::any::Any;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Whether SVG→PNG rasterization was compiled into this binary.
#[must_use]
pub const fn raster_available() -> bool {
    cfg!(feature = "svg_raster")
}

/// A finished export: PNG bytes plus the download file name.
#[derive(Debug)]
pub struct PngExport {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Export feature state: the asset directory roots.
#[derive(Debug, Clone)]
pub struct Export {
    inner: Arc<ExportInner>,
}

#[derive(Debug)]
pub struct ExportInner {
    icons_dir: PathBuf,
    flags_dir: PathBuf,
}

impl Deref for Export {
    type Target = ExportInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Export {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the export feature.
///
/// # Errors
/// Infallible today; kept fallible for parity with the other slices.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, ExportError> {
    tracing::info!(raster = raster_available(), "Export slice initialized");

    let inner = ExportInner {
        icons_dir: config.storage.icons_dir.clone(),
        flags_dir: config.storage.flags_dir.clone(),
    };
    Ok(InitializedSlice::new(Export { inner: Arc::new(inner) }))
}

impl Export {
    fn dir_for(&self, kind: AssetKind) -> &Path {
        match kind {
            AssetKind::Icon => &self.icons_dir,
            AssetKind::Flag => &self.flags_dir,
        }
    }

    /// Rasterizes one asset to PNG.
    ///
    /// # Errors
    /// Fails when the rasterizer is absent, the file does not exist, or
    /// rendering fails.
    pub async fn export_png(&self, kind: AssetKind, name: &str) -> Result<PngExport, ExportError> {
        if !raster_available() {
            return Err(ExportError::Unavailable);
        }

        let name = AssetGuard::verify_file_name(name)?;
        let path = self.dir_for(kind).join(name);
        if !path.is_file() {
            return Err(ExportError::NotFound { name: name.to_owned() });
        }

        let text = tokio::fs::read_to_string(&path).await?;
        let bytes = raster::rasterize_png(&text)?;

        tracing::debug!(kind = %kind, name, size = bytes.len(), "Asset rasterized");
        Ok(PngExport { file_name: png_file_name(name), bytes })
    }
}

/// Derives the download name: `heart.svg` → `heart.png`.
fn png_file_name(name: &str) -> String {
    match name.strip_suffix(".svg") {
        Some(stem) => format!("{stem}.png"),
        None => format!("{name}.png"),
    }
}

//! # Catalog feature slice
//!
//! Owns the icon and flag directories: listing the SVG files inside them,
//! discovering recolorable groups, applying fill-color updates in place, and
//! handing raw file bytes to the static mounts.
//!
//! All state is the file system itself; the slice only carries the two
//! directory roots. Concurrent updates to the same file are intentionally
//! unguarded: each update reads, mutates in memory, and rewrites the whole
//! file in one step.

mod error;
mod groups;
mod handlers;
mod listing;
mod recolor;

pub use crate::error::CatalogError;
pub use crate::handlers::{router, static_router};

use crate::recolor::RecolorScope;
use ihub_domain::asset::AssetKind;
use ihub_domain::config::ApiConfig;
use ihub_domain::constants::ENTIRE_DOCUMENT_GROUP;
use ihub_domain::registry::{FeatureSlice, InitializedSlice};
use ihub_kernel::security::asset::AssetGuard;
use std::any::Any;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Catalog feature state: the two asset directory roots.
#[derive(Debug, Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

#[derive(Debug)]
pub struct CatalogInner {
    icons_dir: PathBuf,
    flags_dir: PathBuf,
}

impl Deref for Catalog {
    type Target = CatalogInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Catalog {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the catalog feature.
///
/// Creates both asset directories if they do not exist yet, so listing never
/// has to handle directory absence.
///
/// # Errors
/// Returns an error if a directory cannot be created.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, CatalogError> {
    let storage = &config.storage;
    std::fs::create_dir_all(&storage.icons_dir)?;
    std::fs::create_dir_all(&storage.flags_dir)?;

    tracing::info!(
        icons = %storage.icons_dir.display(),
        flags = %storage.flags_dir.display(),
        "Catalog slice initialized"
    );

    let inner = CatalogInner {
        icons_dir: storage.icons_dir.clone(),
        flags_dir: storage.flags_dir.clone(),
    };
    Ok(InitializedSlice::new(Catalog { inner: Arc::new(inner) }))
}

impl Catalog {
    /// The backing directory for an asset kind.
    #[must_use]
    pub fn dir_for(&self, kind: AssetKind) -> &Path {
        match kind {
            AssetKind::Icon => &self.icons_dir,
            AssetKind::Flag => &self.flags_dir,
        }
    }

    /// Lists the SVG assets of one kind.
    ///
    /// Icons are reported as bare stems, flags as full file names; existing
    /// clients depend on that asymmetry.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    pub fn list(&self, kind: AssetKind) -> Result<Vec<String>, CatalogError> {
        let mut names = listing::svg_file_names(self.dir_for(kind))?;
        if kind == AssetKind::Icon {
            for name in &mut names {
                if let Some(stem) = name.strip_suffix(".svg") {
                    name.truncate(stem.len());
                }
            }
        }
        Ok(names)
    }

    /// Discovers the leaf group ids of one asset.
    ///
    /// # Errors
    /// Fails when the file does not exist or cannot be parsed.
    pub async fn groups(&self, kind: AssetKind, name: &str) -> Result<Vec<String>, CatalogError> {
        let path = self.asset_path(kind, name)?;
        let text = tokio::fs::read_to_string(&path).await?;
        groups::leaf_group_ids(&text)
    }

    /// Applies a fill-color update in place.
    ///
    /// `group_id` names a `<g>` in the document, or (for flags only) the
    /// `entire_flag` sentinel to recolor the whole document. The file is
    /// rewritten only after the in-memory mutation succeeded; on any error
    /// it is left untouched.
    ///
    /// # Errors
    /// Fails when the file or group does not exist, or the SVG is malformed.
    pub async fn update_color(
        &self,
        kind: AssetKind,
        name: &str,
        group_id: &str,
        color: &str,
    ) -> Result<(), CatalogError> {
        let path = self.asset_path(kind, name)?;
        let text = tokio::fs::read_to_string(&path).await?;

        let scope = if kind == AssetKind::Flag && group_id == ENTIRE_DOCUMENT_GROUP {
            RecolorScope::Document
        } else {
            RecolorScope::Group(group_id)
        };

        let updated = recolor::recolor_document(&text, scope, color)?;
        tokio::fs::write(&path, updated).await?;

        tracing::debug!(kind = %kind, name, group_id, color, "Asset recolored");
        Ok(())
    }

    /// Reads an asset's raw bytes for the static mounts.
    ///
    /// # Errors
    /// Fails when the file does not exist.
    pub async fn read_asset(&self, kind: AssetKind, name: &str) -> Result<Vec<u8>, CatalogError> {
        let path = self.asset_path(kind, name)?;
        Ok(tokio::fs::read(&path).await?)
    }

    /// Resolves a validated asset name against its directory.
    ///
    /// # Errors
    /// Rejects unsafe names and absent files.
    pub fn asset_path(&self, kind: AssetKind, name: &str) -> Result<PathBuf, CatalogError> {
        let name = AssetGuard::verify_file_name(name)?;
        let path = self.dir_for(kind).join(name);
        if !path.is_file() {
            return Err(CatalogError::NotFound { name: name.to_owned() });
        }
        Ok(path)
    }
}

//! Facade crate for IconHub features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `ihub` (optionally with the `svg_raster` feature flag).
//! - Call `ihub::init` to register feature slices; extend as new slices appear.

pub use ihub_domain as domain;
use ihub_domain::capabilities::Capabilities;
use ihub_domain::config::ApiConfig;
pub use ihub_kernel as kernel;

pub mod server {
    pub mod router {
        pub use ihub_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use ihub_catalog as catalog;
    pub use ihub_export as export;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "catalog",
        "export",
        #[cfg(feature = "svg_raster")]
        "svg_raster",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all features for server mode.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    config: &ApiConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Catalog (owns the asset directories; creates them on first start)
    slices.push(features::catalog::init(config)?);

    // Export (PNG rasterization, capability-gated)
    slices.push(features::export::init(config)?);

    Ok(slices)
}

/// The capability set this build of the platform provides.
#[must_use]
pub fn capabilities() -> Capabilities {
    Capabilities { raster: features::export::raster_available() }
}

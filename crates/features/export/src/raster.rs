use crate::error::ExportError;

/// Renders an SVG document to PNG bytes at its intrinsic size.
#[cfg(feature = "svg_raster")]
pub(crate) fn rasterize_png(svg: &str) -> Result<Vec<u8>, ExportError> {
    use resvg::{tiny_skia, usvg};

    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| ExportError::Render { message: e.to_string() })?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width().max(1), size.height().max(1))
        .ok_or_else(|| ExportError::Render { message: "empty render surface".to_owned() })?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap.encode_png().map_err(|e| ExportError::Render { message: e.to_string() })
}

#[cfg(not(feature = "svg_raster"))]
pub(crate) fn rasterize_png(_svg: &str) -> Result<Vec<u8>, ExportError> {
    Err(ExportError::Unavailable)
}

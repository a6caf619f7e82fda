use crate::error::CatalogError;
use ihub_domain::constants::SVG_EXTENSION;
use std::path::Path;
use walkdir::WalkDir;

/// Enumerates the SVG file names directly inside `dir`, sorted by name.
///
/// Subdirectories are not descended into; the catalog directories are flat.
pub(crate) fn svg_file_names(dir: &Path) -> Result<Vec<String>, CatalogError> {
    let mut names = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == SVG_EXTENSION) {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            names.push(name.to_owned());
        }
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn lists_only_svg_files_sorted() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("zebra.svg"), "<svg/>").unwrap();
        fs::write(dir.path().join("apple.svg"), "<svg/>").unwrap();
        fs::write(dir.path().join("notes.txt"), "nope").unwrap();
        fs::create_dir(dir.path().join("nested.svg")).unwrap();

        let names = svg_file_names(dir.path()).expect("listing");
        assert_eq!(names, vec!["apple.svg", "zebra.svg"]);
    }

    #[test]
    fn empty_directory_lists_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(svg_file_names(dir.path()).expect("listing").is_empty());
    }
}

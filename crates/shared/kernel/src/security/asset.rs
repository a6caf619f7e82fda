/// Errors raised by [`AssetGuard`].
#[derive(Debug, thiserror::Error)]
pub enum AssetGuardError {
    #[error("asset name rejected: {reason}")]
    Rejected { reason: &'static str },
}

/// Utilities for safe handling of client-supplied asset names.
///
/// Asset names are joined onto the icon/flag directories; a name like
/// `../../etc/passwd` must never escape them.
#[derive(Debug)]
pub struct AssetGuard;

impl AssetGuard {
    /// Validates a client-supplied file name.
    ///
    /// Accepts plain file names only: no path separators, no `.`/`..`
    /// components, no NUL bytes. Returns the name unchanged on success so
    /// call sites can chain into a path join.
    ///
    /// # Errors
    /// Returns [`AssetGuardError::Rejected`] with the offending property.
    pub fn verify_file_name(name: &str) -> Result<&str, AssetGuardError> {
        if name.is_empty() {
            return Err(AssetGuardError::Rejected { reason: "empty name" });
        }
        if name.contains('/') || name.contains('\\') {
            return Err(AssetGuardError::Rejected { reason: "path separator" });
        }
        if name == "." || name == ".." {
            return Err(AssetGuardError::Rejected { reason: "relative component" });
        }
        if name.contains('\0') {
            return Err(AssetGuardError::Rejected { reason: "NUL byte" });
        }
        Ok(name)
    }
}

//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fs::naming::filename_for_url;

/// Local path an asset URL downloads to.
pub fn asset_path(output_dir: &Path, url: &str) -> PathBuf {
    output_dir.join(filename_for_url(url))
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_path() {
        let path = asset_path(Path::new("Assets"), "https://x.test/f.pdf?x=1");
        assert_eq!(path, PathBuf::from("Assets/f.pdf"));
    }

    #[test]
    fn test_ensure_dir_creates_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested/out");
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());

        // Second call is a no-op.
        ensure_dir(&dir).unwrap();
    }
}

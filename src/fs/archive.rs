//! Append-only archive of fetched page bodies.

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Append a fetched page body (plus a trailing newline) to the archive.
///
/// The archive is capped: if the append would push it past `max_bytes`, the
/// current file is rotated to `<path>.1` first, replacing any earlier
/// rotation. One rotation slot is kept, so disk usage stays bounded at
/// roughly twice the cap.
pub fn append_page(path: &Path, content: &str, max_bytes: u64) -> Result<()> {
    rotate_if_needed(path, content.len() as u64 + 1, max_bytes)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = OpenOptions::new().append(true).create(true).open(path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;

    Ok(())
}

/// Rotate the archive aside when the incoming append would exceed the cap.
fn rotate_if_needed(path: &Path, incoming_bytes: u64, max_bytes: u64) -> Result<()> {
    let current_len = match fs::metadata(path) {
        Ok(meta) => meta.len(),
        // No archive yet, nothing to rotate.
        Err(_) => return Ok(()),
    };

    if current_len > 0 && current_len + incoming_bytes > max_bytes {
        let rotated = rotated_path(path);
        tracing::info!(
            "Archive {} at {} bytes, rotating to {}",
            path.display(),
            current_len,
            rotated.display()
        );
        fs::rename(path, &rotated)?;
    }

    Ok(())
}

fn rotated_path(path: &Path) -> PathBuf {
    let mut rotated = OsString::from(path.as_os_str());
    rotated.push(".1");
    PathBuf::from(rotated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_creates_and_appends() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = tmp.path().join("pages.html");

        append_page(&archive, "<html>one</html>", 1024).unwrap();
        append_page(&archive, "<html>two</html>", 1024).unwrap();

        let content = fs::read_to_string(&archive).unwrap();
        assert_eq!(content, "<html>one</html>\n<html>two</html>\n");
    }

    #[test]
    fn test_append_rotates_at_cap() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = tmp.path().join("pages.html");

        append_page(&archive, "aaaaaaaaaa", 16).unwrap();
        // 11 bytes on disk; another 11 would exceed the 16-byte cap.
        append_page(&archive, "bbbbbbbbbb", 16).unwrap();

        assert_eq!(fs::read_to_string(&archive).unwrap(), "bbbbbbbbbb\n");
        assert_eq!(
            fs::read_to_string(tmp.path().join("pages.html.1")).unwrap(),
            "aaaaaaaaaa\n"
        );
    }

    #[test]
    fn test_rotation_replaces_previous_slot() {
        let tmp = tempfile::tempdir().unwrap();
        let archive = tmp.path().join("pages.html");

        append_page(&archive, "first", 8).unwrap();
        append_page(&archive, "second", 8).unwrap();
        append_page(&archive, "third", 8).unwrap();

        assert_eq!(fs::read_to_string(&archive).unwrap(), "third\n");
        assert_eq!(
            fs::read_to_string(tmp.path().join("pages.html.1")).unwrap(),
            "second\n"
        );
    }
}

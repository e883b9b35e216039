//! Deterministic filename generation from asset URLs.

use regex::Regex;

/// Derive a filesystem-safe local filename from an asset URL.
///
/// Pure function of the URL string: the same input always produces the same
/// name, which is what makes the downloader's existence check work as an
/// idempotence guard across runs.
///
/// Steps: lowercase the URL, take the extension and last segment from the
/// path component, squash runs of non-alphanumerics into single underscores,
/// strip a leading underscore and the underscore artifact of the extension's
/// own dot, then append the real extension once.
pub fn filename_for_url(raw_url: &str) -> String {
    let lowercase = raw_url.to_lowercase();

    // Extension and base name come from the path component only; the query
    // string never contributes to the name.
    let path_part = lowercase.split('?').next().unwrap_or(&lowercase);
    let ext = extension_of(path_part);
    let base = path_part.rsplit('/').next().unwrap_or(path_part);

    let non_alphanumeric = Regex::new(r"[^a-z0-9]+").unwrap();
    let mut name = non_alphanumeric.replace_all(base, "_").into_owned();

    let repeated_underscores = Regex::new(r"_+").unwrap();
    name = repeated_underscores.replace_all(&name, "_").into_owned();

    if let Some(trimmed) = name.strip_prefix('_') {
        name = trimmed.to_string();
    }

    // "file.pdf" squashes to "file_pdf"; drop that artifact before appending
    // the real extension.
    if let Some(stem) = ext.strip_prefix('.') {
        let artifact = format!("_{}", stem);
        if let Some(trimmed) = name.strip_suffix(&artifact) {
            name = trimmed.to_string();
        }
    }

    let mut filename = format!("{}{}", name, ext);

    // Final guard against any query remnant.
    if let Some(idx) = filename.find('?') {
        filename.truncate(idx);
    }
    filename
}

/// Extension (with leading dot) of the last path segment, or empty.
fn extension_of(path: &str) -> &str {
    let segment = path.rsplit('/').next().unwrap_or(path);
    match segment.rfind('.') {
        Some(idx) => &segment[idx..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_basic() {
        assert_eq!(
            filename_for_url("https://x.test/manual.pdf"),
            "manual.pdf"
        );
    }

    #[test]
    fn test_filename_strips_query() {
        assert_eq!(
            filename_for_url("https://x.test/f.pdf?x=1"),
            "f.pdf"
        );
    }

    #[test]
    fn test_filename_messy_url() {
        let name = filename_for_url("HTTPS://X.COM/My File!!.PDF?v=2");
        assert_eq!(name, "my_file.pdf");
        assert!(!name.starts_with('_'));
        assert!(!name.contains('?'));
        assert_eq!(name.matches(".pdf").count(), 1);
    }

    #[test]
    fn test_filename_is_deterministic() {
        let url = "https://x.test/some/deep/path/Firmware v1.2.zip";
        assert_eq!(filename_for_url(url), filename_for_url(url));
    }

    #[test]
    fn test_filename_collapses_underscores() {
        assert_eq!(
            filename_for_url("https://x.test/a  --  b.txt"),
            "a_b.txt"
        );
    }

    #[test]
    fn test_filename_no_extension() {
        assert_eq!(filename_for_url("https://x.test/readme"), "readme");
    }

    #[test]
    fn test_filename_keeps_interior_extension_text() {
        // Only the trailing artifact is dropped, not interior occurrences.
        assert_eq!(
            filename_for_url("https://x.test/pdf-guide.pdf"),
            "pdf_guide.pdf"
        );
    }
}

//! Asset link extraction from raw page text.

use regex::Regex;
use url::Url;

/// Extensions recognized as downloadable assets.
///
/// Matching is case-sensitive: an uppercase `.PDF` in the page source is not
/// picked up. Known asymmetry with the sanitizer, which lowercases.
const ALLOWED_EXTENSIONS: &str = "pdf|png|jpg|webp|zip|rar|stl|7z|json|txt";

/// Extract asset URLs from `href` attributes in the given text.
///
/// This is a textual pattern match, not an HTML parse: single-quoted
/// attributes are missed and matches inside comments or scripts are kept.
/// Returns matches in first-seen order; duplicates are not removed here.
pub fn extract_asset_links(input: &str) -> Vec<String> {
    let pattern = format!(r#"href="([^"]+\.(?:{})[^"]*)""#, ALLOWED_EXTENSIONS);
    let re = Regex::new(&pattern).unwrap();

    re.captures_iter(input)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Check whether a candidate URL is syntactically well-formed.
pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_allowed_extension() {
        let html = r#"<a href="https://x.test/f.pdf?x=1">doc</a>"#;
        assert_eq!(extract_asset_links(html), vec!["https://x.test/f.pdf?x=1"]);
    }

    #[test]
    fn test_extract_disallowed_extension() {
        let html = r#"<a href="foo.bar">nope</a>"#;
        assert!(extract_asset_links(html).is_empty());
    }

    #[test]
    fn test_extract_preserves_document_order() {
        let html = r#"
            <a href="https://x.test/b.zip">b</a>
            <a href="https://x.test/a.png">a</a>
        "#;
        assert_eq!(
            extract_asset_links(html),
            vec!["https://x.test/b.zip", "https://x.test/a.png"]
        );
    }

    #[test]
    fn test_extract_is_case_sensitive() {
        let html = r#"<a href="https://x.test/f.PDF">doc</a>"#;
        assert!(extract_asset_links(html).is_empty());
    }

    #[test]
    fn test_extract_single_quotes_missed() {
        let html = "<a href='https://x.test/f.pdf'>doc</a>";
        assert!(extract_asset_links(html).is_empty());
    }

    #[test]
    fn test_is_valid_url() {
        assert!(is_valid_url("https://x.test/f.pdf"));
        assert!(!is_valid_url("not a url"));
    }
}

// src/extract/links.rs
// =============================================================================
// This module finds the outbound links a crawl task will follow.
//
// Three steps, always in this order:
// 1. extract_links: regex-match absolute href="http(s)://..." attributes
// 2. drop asset links (.pdf, .png, .css, .jpg, .ico)
// 3. cap the survivors and strip the href="..." wrapper
//
// Relative links are never matched. Only absolute http/https URLs whose host
// ends in an extension-like suffix (.com, .org, .1, ...) are considered.
// =============================================================================

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HREF_REGEX: Regex = Regex::new(
        r#"href="https?://(www\.)?[-a-zA-Z0-9@:%._\+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_\+.~#?&/=]*)""#
    )
    .expect("href regex is valid");
}

/// Upper bound on the number of links a single page fans out to
pub const MAX_FOLLOWED_LINKS: usize = 9;

// Suffixes that point at non-HTML assets. Matched against the raw
// attribute text, so the closing quote is part of the suffix.
const ASSET_SUFFIXES: [&str; 5] = [".pdf\"", ".png\"", ".css\"", ".jpg\"", ".ico\""];

// Prefix carried by every raw match
const HREF_PREFIX_LEN: usize = "href=\"".len();

// Returns every raw `href="..."` match in the body, quotes included
//
// Example:
//   body = r#"<a href="https://example.com/about">About</a>"#
//   result = [r#"href="https://example.com/about""#]
pub fn extract_links(body: &str) -> Vec<String> {
    HREF_REGEX
        .find_iter(body)
        .map(|m| m.as_str().to_string())
        .collect()
}

// Turns raw href matches into the bare URLs to crawl next
//
// - Asset links are dropped (stable, relative order kept)
// - Fewer than 10 survivors: all but the last one are kept
// - Otherwise: the first MAX_FOLLOWED_LINKS are kept
// - href=" and the closing quote are stripped from each
pub fn select_links(mut raw: Vec<String>) -> Vec<String> {
    raw.retain(|link| !is_asset_link(link));

    if raw.is_empty() {
        return raw;
    }

    // Pages with fewer than 10 links lose their last one. This matches how
    // crawls have always been bounded; changing it changes crawl results.
    let end = if raw.len() < 10 {
        raw.len() - 1
    } else {
        MAX_FOLLOWED_LINKS
    };

    raw.truncate(end);
    raw.into_iter().map(|link| strip_href(&link)).collect()
}

fn is_asset_link(link: &str) -> bool {
    ASSET_SUFFIXES.iter().any(|suffix| link.ends_with(suffix))
}

// `href="https://a.com/x"` -> `https://a.com/x`
fn strip_href(link: &str) -> String {
    link[HREF_PREFIX_LEN..link.len() - 1].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_links(count: usize) -> String {
        (0..count)
            .map(|i| format!(r#"<a href="https://site{i}.example.com/page">link {i}</a>"#))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_extract_absolute_link() {
        let html = r#"<a href="https://www.rust-lang.org/learn">Learn</a>"#;
        let links = extract_links(html);
        assert_eq!(links, vec![r#"href="https://www.rust-lang.org/learn""#]);
    }

    #[test]
    fn test_skip_relative_and_single_quoted_links() {
        let html = r#"
            <a href="/docs">Docs</a>
            <a href='https://example.com/x'>X</a>
            <a href="mailto:a@b.com">Mail</a>
        "#;
        assert!(extract_links(html).is_empty());
    }

    #[test]
    fn test_extract_link_with_port_and_query() {
        let html = r#"<a href="http://127.0.0.1:8080/a/b?x=1&y=2">local</a>"#;
        let links = extract_links(html);
        assert_eq!(links, vec![r#"href="http://127.0.0.1:8080/a/b?x=1&y=2""#]);
    }

    #[test]
    fn test_asset_links_are_filtered() {
        let raw = vec![
            r#"href="https://a.com/doc.pdf""#.to_string(),
            r#"href="https://a.com/one""#.to_string(),
            r#"href="https://a.com/logo.png""#.to_string(),
            r#"href="https://a.com/style.css""#.to_string(),
            r#"href="https://a.com/two""#.to_string(),
            r#"href="https://a.com/photo.jpg""#.to_string(),
            r#"href="https://a.com/favicon.ico""#.to_string(),
            r#"href="https://a.com/three.html""#.to_string(),
        ];
        // 3 survivors, fewer than 10, so the last one is dropped
        let selected = select_links(raw);
        assert_eq!(selected, vec!["https://a.com/one", "https://a.com/two"]);
    }

    #[test]
    fn test_other_suffixes_are_eligible() {
        let raw = vec![
            r#"href="https://a.com/report.pdfx""#.to_string(),
            r#"href="https://a.com/image.gif""#.to_string(),
        ];
        assert_eq!(select_links(raw), vec!["https://a.com/report.pdfx"]);
    }

    #[test]
    fn test_more_than_ten_links_keeps_nine() {
        let raw = extract_links(&page_with_links(12));
        assert_eq!(raw.len(), 12);

        let selected = select_links(raw);
        assert_eq!(selected.len(), MAX_FOLLOWED_LINKS);
        assert_eq!(selected[0], "https://site0.example.com/page");
        assert_eq!(selected[8], "https://site8.example.com/page");
    }

    #[test]
    fn test_exactly_ten_links_keeps_nine() {
        let selected = select_links(extract_links(&page_with_links(10)));
        assert_eq!(selected.len(), 9);
    }

    #[test]
    fn test_fewer_than_ten_links_drops_last() {
        let selected = select_links(extract_links(&page_with_links(4)));
        assert_eq!(
            selected,
            vec![
                "https://site0.example.com/page",
                "https://site1.example.com/page",
                "https://site2.example.com/page",
            ]
        );
    }

    #[test]
    fn test_single_link_spawns_nothing() {
        assert!(select_links(extract_links(&page_with_links(1))).is_empty());
    }

    #[test]
    fn test_no_links() {
        assert!(select_links(Vec::new()).is_empty());
    }
}

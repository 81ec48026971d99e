/// URL-aware text segmentation
///
/// Turns free-form note text into an ordered sequence of display segments,
/// condensing literal URLs into short numbered markers (`[1]`, `[2]`, ...)
/// while keeping the full URL available as the hyperlink target.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Matches `http://` or `https://` followed by non-whitespace.
    ///
    /// Intentionally greedy: punctuation glued to the end of a URL (a
    /// sentence-ending period, a closing paren) is part of the match. Tests
    /// pin this behavior.
    static ref URL_PATTERN: Regex =
        Regex::new(r"(?i)https?://\S+").expect("valid URL pattern");
}

/// One atomic unit of a text rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Segment {
    /// Literal text, rendered as-is
    Text { content: String },
    /// Condensed link marker paired with the URL it replaces
    Link {
        /// Display marker, e.g. `[3]`
        content: String,
        /// The raw matched URL
        url: String,
        /// 1-based position of this link within the invocation
        link_number: usize,
    },
}

impl Segment {
    /// The display text of this segment regardless of variant
    pub fn content(&self) -> &str {
        match self {
            Segment::Text { content } => content,
            Segment::Link { content, .. } => content,
        }
    }
}

/// Result of segmenting one piece of text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Segmented {
    /// Display segments in input order
    pub segments: Vec<Segment>,
    /// Matched URLs in order of first appearance (index i holds link i+1)
    pub urls: Vec<String>,
}

/// Scan `text` for URLs and split it into display segments.
///
/// Link numbers start at 1 and increase in order of appearance, with no gaps.
/// Blank spans between URLs are dropped. Input with no URLs yields a single
/// `Text` segment (or nothing when the input is empty or whitespace-only).
///
/// Pure and total: every string input produces a result, counters are scoped
/// to the call, and concurrent invocations cannot interfere.
pub fn segment(text: &str) -> Segmented {
    let mut segments = Vec::new();
    let mut urls = Vec::new();

    if text.is_empty() {
        return Segmented { segments, urls };
    }

    let mut last_end = 0;
    for (idx, m) in URL_PATTERN.find_iter(text).enumerate() {
        let before = &text[last_end..m.start()];
        if !before.trim().is_empty() {
            segments.push(Segment::Text {
                content: before.to_string(),
            });
        }

        let link_number = idx + 1;
        urls.push(m.as_str().to_string());
        segments.push(Segment::Link {
            content: format!("[{}]", link_number),
            url: m.as_str().to_string(),
            link_number,
        });

        last_end = m.end();
    }

    let remaining = &text[last_end..];
    if !remaining.trim().is_empty() {
        segments.push(Segment::Text {
            content: remaining.to_string(),
        });
    }

    Segmented { segments, urls }
}

/// Produce a shortened display form of a URL: hostname (without `www.`) plus
/// as much of the path as fits in `max_length`, ellipsized.
///
/// URLs that don't parse fall back to plain truncation.
pub fn shorten_url(url: &str, max_length: usize) -> String {
    lazy_static! {
        static ref HOST_PATH: Regex =
            Regex::new(r"(?i)^https?://([^/?\s]+)([/?]\S*)?$").expect("valid host pattern");
    }

    if let Some(caps) = HOST_PATH.captures(url) {
        let domain = caps
            .get(1)
            .map(|m| m.as_str())
            .unwrap_or_default()
            .trim_start_matches("www.");
        let raw_path = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        // A query on a path-less URL still implies the root path.
        let path = if raw_path.starts_with('?') {
            format!("/{}", raw_path)
        } else {
            raw_path.to_string()
        };

        if path.len() <= 1 {
            return domain.to_string();
        }

        let full = format!("{}{}", domain, path);
        if full.len() <= max_length {
            return full;
        }

        let keep = max_length.saturating_sub(domain.len()).saturating_sub(3);
        let truncated: String = path.chars().take(keep).collect();
        return format!("{}{}...", domain, truncated);
    }

    if url.len() > max_length {
        let truncated: String = url.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_input_yields_nothing() {
        let result = segment("");
        assert!(result.segments.is_empty());
        assert!(result.urls.is_empty());
    }

    #[test]
    fn test_blank_input_yields_nothing() {
        let result = segment("   \n\t ");
        assert!(result.segments.is_empty());
        assert!(result.urls.is_empty());
    }

    #[test]
    fn test_no_urls_single_text_segment() {
        let result = segment("read the attention paper today");
        assert_eq!(
            result.segments,
            vec![Segment::Text {
                content: "read the attention paper today".to_string()
            }]
        );
        assert!(result.urls.is_empty());
    }

    #[test]
    fn test_single_url_numbered_one() {
        let result = segment("see https://example.com/paper for details");
        assert_eq!(result.urls, vec!["https://example.com/paper".to_string()]);
        assert_eq!(
            result.segments,
            vec![
                Segment::Text {
                    content: "see ".to_string()
                },
                Segment::Link {
                    content: "[1]".to_string(),
                    url: "https://example.com/paper".to_string(),
                    link_number: 1,
                },
                Segment::Text {
                    content: " for details".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_link_numbers_increase_in_order() {
        let result = segment("http://a.com then http://b.com then http://c.com");
        let numbers: Vec<usize> = result
            .segments
            .iter()
            .filter_map(|s| match s {
                Segment::Link { link_number, .. } => Some(*link_number),
                _ => None,
            })
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(result.urls, vec!["http://a.com", "http://b.com", "http://c.com"]);
    }

    #[test]
    fn test_adjacent_urls_no_empty_text_segments() {
        let result = segment("https://a.com https://b.com");
        assert_eq!(result.segments.len(), 2);
        assert!(result
            .segments
            .iter()
            .all(|s| matches!(s, Segment::Link { .. })));
    }

    #[test]
    fn test_url_at_start_and_end() {
        let result = segment("https://a.com middle https://b.com");
        assert_eq!(result.segments.len(), 3);
        assert_eq!(result.segments[1].content(), " middle ");
    }

    #[test]
    fn test_scheme_case_insensitive() {
        let result = segment("HTTPS://Example.COM/x");
        assert_eq!(result.urls, vec!["HTTPS://Example.COM/x"]);
    }

    #[test]
    fn test_trailing_punctuation_included() {
        // Greedy non-whitespace matching keeps the sentence period. This is
        // the documented behavior, pinned here on purpose.
        let result = segment("read https://a.com/x. Then sleep");
        assert_eq!(result.urls, vec!["https://a.com/x."]);
    }

    #[test]
    fn test_marker_content_format() {
        let result = segment("a http://x.com b http://y.com");
        match &result.segments[1] {
            Segment::Link { content, .. } => assert_eq!(content, "[1]"),
            other => panic!("expected link, got {:?}", other),
        }
        match &result.segments[3] {
            Segment::Link { content, .. } => assert_eq!(content, "[2]"),
            other => panic!("expected link, got {:?}", other),
        }
    }

    #[test]
    fn test_reconstruction_preserves_urls_in_order() {
        let input = "x https://a.com y https://b.com z";
        let result = segment(input);
        let rebuilt: String = result
            .segments
            .iter()
            .map(|s| match s {
                Segment::Text { content } => content.clone(),
                Segment::Link { url, .. } => url.clone(),
            })
            .collect();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn test_shorten_url_domain_only() {
        assert_eq!(shorten_url("https://www.example.com/", 40), "example.com");
        assert_eq!(shorten_url("https://example.com", 40), "example.com");
    }

    #[test]
    fn test_shorten_url_short_path_kept() {
        assert_eq!(
            shorten_url("https://example.com/papers", 40),
            "example.com/papers"
        );
    }

    #[test]
    fn test_shorten_url_query_without_path() {
        assert_eq!(shorten_url("https://a.com?q=1", 40), "a.com/?q=1");
        assert_eq!(shorten_url("https://www.a.com/search?q=rust", 40), "a.com/search?q=rust");
    }

    #[test]
    fn test_shorten_url_long_path_ellipsized() {
        let shortened = shorten_url(
            "https://example.com/a/very/long/path/to/some/deeply/nested/resource",
            30,
        );
        assert!(shortened.starts_with("example.com/"));
        assert!(shortened.ends_with("..."));
        assert!(shortened.len() <= 30 + 3);
    }

    #[test]
    fn test_shorten_url_unparseable_truncated() {
        assert_eq!(shorten_url("not a url", 40), "not a url");
        let long = "x".repeat(60);
        let shortened = shorten_url(&long, 40);
        assert_eq!(shortened.len(), 40);
        assert!(shortened.ends_with("..."));
    }

    proptest! {
        /// k URLs in, k links out, numbered 1..=k in appearance order.
        #[test]
        fn prop_link_numbers_dense_and_ordered(words in prop::collection::vec("[a-z]{1,8}", 0..6), k in 0usize..5) {
            let mut input = String::new();
            let mut expected_urls = Vec::new();
            for i in 0..k {
                if let Some(w) = words.get(i % words.len().max(1)) {
                    input.push_str(w);
                    input.push(' ');
                }
                let url = format!("https://site{}.example/p", i);
                expected_urls.push(url.clone());
                input.push_str(&url);
                input.push(' ');
            }

            let result = segment(&input);
            prop_assert_eq!(&result.urls, &expected_urls);
            let numbers: Vec<usize> = result.segments.iter().filter_map(|s| match s {
                Segment::Link { link_number, .. } => Some(*link_number),
                _ => None,
            }).collect();
            prop_assert_eq!(numbers, (1..=k).collect::<Vec<_>>());
        }

        /// No input text is lost: concatenating segments with links expanded
        /// back to their URLs reproduces every URL in order.
        #[test]
        fn prop_urls_survive_reconstruction(prefix in "[a-z ]{0,12}", suffix in "[a-z ]{0,12}") {
            let input = format!("{}https://a.example/one{}", prefix, suffix);
            let result = segment(&input);
            let rebuilt: String = result.segments.iter().map(|s| match s {
                Segment::Text { content } => content.clone(),
                Segment::Link { url, .. } => url.clone(),
            }).collect();
            prop_assert!(rebuilt.contains("https://a.example/one"));
        }
    }
}

/// Markdown-flavored URL rewriting
///
/// For rendering surfaces that understand Markdown natively: rewrites bare
/// URLs into `[[n]](url)` links while leaving pre-existing Markdown links
/// untouched.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref MARKDOWN_LINK: Regex =
        Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid markdown link pattern");
    static ref BARE_URL: Regex =
        Regex::new(r"(?i)https?://\S+").expect("valid URL pattern");
    static ref PLACEHOLDER: Regex =
        Regex::new(r"__PROTECTED_LINK_(\d+)__").expect("valid placeholder pattern");
}

/// Rewrite bare URLs in `text` to condensed Markdown links.
///
/// Three passes:
/// 1. Swap every existing `[label](target)` span for an indexed placeholder
///    so pass 2 cannot mangle URLs already inside a link target.
/// 2. Rewrite each remaining bare URL to `[[n]](url)`, numbering from 1.
/// 3. Restore the placeholders.
///
/// Input containing only well-formed Markdown links and no bare URLs comes
/// back unchanged. The counter is scoped to the call and independent of
/// [`segment`](crate::segment::segment).
pub fn to_markdown_links(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut protected: Vec<String> = Vec::new();
    let shielded = MARKDOWN_LINK.replace_all(text, |caps: &Captures| {
        protected.push(caps[0].to_string());
        format!("__PROTECTED_LINK_{}__", protected.len() - 1)
    });

    let mut counter = 0usize;
    let rewritten = BARE_URL.replace_all(&shielded, |caps: &Captures| {
        counter += 1;
        format!("[[{}]]({})", counter, &caps[0])
    });

    PLACEHOLDER
        .replace_all(&rewritten, |caps: &Captures| {
            let index: usize = caps[1].parse().unwrap_or(0);
            protected
                .get(index)
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

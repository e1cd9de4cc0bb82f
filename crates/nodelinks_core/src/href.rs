/// Substring every collected URL must contain.
pub const NODE_PATTERN: &str = "commonsense.org/node/";

/// Marker of a search-engine redirect wrapper (`https://www.google.com/url?q=<target>&...`).
pub const REDIRECT_MARKER: &str = "/url?q=";

/// Qualifying predicate, applied to the raw resolved href.
pub fn qualifies(href: &str) -> bool {
    href.contains(NODE_PATTERN)
}

/// Undo one layer of redirect wrapping.
///
/// Takes the text after the first marker, cut at a following marker and then
/// at the first `&`. The wrapped value is returned as-is, without
/// percent-decoding.
pub fn unwrap_redirect(href: &str) -> &str {
    let Some((_, wrapped)) = href.split_once(REDIRECT_MARKER) else {
        return href;
    };
    let wrapped = wrapped
        .split_once(REDIRECT_MARKER)
        .map_or(wrapped, |(head, _)| head);
    wrapped.split_once('&').map_or(wrapped, |(head, _)| head)
}

/// Drop everything from the first `#` onward.
pub fn strip_fragment(href: &str) -> &str {
    href.split_once('#').map_or(href, |(head, _)| head)
}

/// Full per-anchor pipeline: filter, unwrap, strip.
///
/// Returns `None` when the raw href does not qualify, or when unwrapping and
/// stripping leave a string without [`NODE_PATTERN`].
pub fn normalize_href(href: &str) -> Option<&str> {
    if !qualifies(href) {
        return None;
    }
    let cleaned = strip_fragment(unwrap_redirect(href));
    qualifies(cleaned).then_some(cleaned)
}

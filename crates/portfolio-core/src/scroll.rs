pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Selector to scroll to for an in-page anchor, or `None` for a bare `#`
/// or a non-fragment link.
#[inline]
pub fn fragment_selector(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

//! Text around a matched node, used to decide what a date refers to.

use scraper::ElementRef;

/// Ancestor levels gathered: parent and grandparent.
pub const CONTEXT_DEPTH: usize = 2;

/// Lowercased text of `el` with runs of whitespace collapsed to one space.
pub fn collapsed_text(el: ElementRef<'_>) -> String {
    el.text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Collapsed text of up to `depth` element ancestors, nearest first.
///
/// Stops quietly at the document root: missing ancestors contribute nothing.
pub fn ancestor_text(el: ElementRef<'_>, depth: usize) -> String {
    let mut parts = Vec::with_capacity(depth);
    let mut current = el;
    for _ in 0..depth {
        let Some(parent) = current.parent().and_then(ElementRef::wrap) else {
            break;
        };
        parts.push(collapsed_text(parent));
        current = parent;
    }
    parts.join(" ")
}

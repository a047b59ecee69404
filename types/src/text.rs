//! Rendering helpers for values quoted inside error messages.

const ELLIPSIS: &str = "...";

/// Clip a rendered value to at most `max` characters.
///
/// Surrounding whitespace is trimmed first. Clipped output ends in `...`,
/// which counts toward `max`; `max` never drops below the ellipsis width.
/// Counts `char`s, so multi-byte text is never split.
pub(crate) fn clip(rendered: &str, max: usize) -> String {
    let rendered = rendered.trim();
    let max = max.max(ELLIPSIS.len());
    if rendered.chars().count() <= max {
        return rendered.to_string();
    }
    let mut clipped: String = rendered.chars().take(max - ELLIPSIS.len()).collect();
    clipped.push_str(ELLIPSIS);
    clipped
}

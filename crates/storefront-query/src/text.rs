/// Marker appended to text cut by [`truncate`].
pub const ELLIPSIS: &str = "...";

/// Builds a URL slug from a product title.
///
/// The title is lower-cased, every run of characters outside `[a-z0-9]`
/// becomes one `-`, and a leading or trailing `-` is dropped.
#[must_use]
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut in_separator = false;

    for ch in lower.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            slug.push(ch);
            in_separator = false;
        } else if !in_separator {
            slug.push('-');
            in_separator = true;
        }
    }

    let trimmed = slug.strip_prefix('-').unwrap_or(&slug);
    let trimmed = trimmed.strip_suffix('-').unwrap_or(trimmed);
    trimmed.to_string()
}

/// Shortens `text` to at most `max_len` characters plus [`ELLIPSIS`].
///
/// Text that already fits is returned unchanged. Otherwise the kept prefix has
/// its trailing whitespace trimmed before the marker is appended, so
/// `max_len == 0` yields the marker alone. Lengths count `char`s, not bytes.
#[must_use]
pub fn truncate(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        None => text.to_string(),
        Some((cut, _)) => {
            let mut shortened = text[..cut].trim_end().to_string();
            shortened.push_str(ELLIPSIS);
            shortened
        }
    }
}

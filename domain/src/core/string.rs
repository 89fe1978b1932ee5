//! String utilities for the domain layer.

/// Truncate a string to a maximum byte length with ellipsis (UTF-8 safe)
///
/// The cut is moved back to the nearest character boundary so multi-byte
/// characters are never split. The result never exceeds `max_len` bytes;
/// below 3 there is no room for the ellipsis, so the text is just cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    if max_len < 3 {
        return s[..floor_boundary(s, max_len)].to_string();
    }
    let end = floor_boundary(s, max_len - 3);
    format!("{}...", &s[..end])
}

fn floor_boundary(s: &str, mut index: usize) -> usize {
    index = index.min(s.len());
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

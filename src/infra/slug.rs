//! Title sanitization for task filenames.

/// Converts a title into the filename-safe part of a task id.
///
/// Every character outside `[a-zA-Z0-9]` becomes `_` and the result is
/// lowercased. Characters outside the Basic Multilingual Plane (most emoji)
/// take two UTF-16 code units and therefore become two underscores, which
/// keeps ids compatible with task directories written by earlier versions.
/// Nothing is collapsed, trimmed, or truncated, and an empty title stays empty.
///
/// # Examples
///
/// ```
/// use taskdir::infra::sanitize_title;
///
/// assert_eq!(sanitize_title("Buy milk"), "buy_milk");
/// assert_eq!(sanitize_title("Q3: Report!"), "q3__report_");
/// ```
pub fn sanitize_title(title: &str) -> String {
    let mut result = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
        } else {
            for _ in 0..c.len_utf16() {
                result.push('_');
            }
        }
    }
    result
}

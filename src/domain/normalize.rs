//! Field normalizers applied when records are constructed.

use url::Url;

/// Upper-cases the first character and lower-cases the rest.
///
/// When the first character upper-cases to several characters (`ß` → `SS`)
/// only the first of them stays upper-case, so `capitalize` is idempotent.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out = String::with_capacity(value.len());
    let mut upper = first.to_uppercase();
    if let Some(head) = upper.next() {
        out.push(head);
    }
    out.extend(upper.flat_map(char::to_lowercase));
    out.extend(chars.flat_map(char::to_lowercase));
    out
}

/// Removes spaces, non-breaking spaces and newlines from a salary range.
pub fn strip_salary_range(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ' ' | '\u{a0}' | '\n'))
        .collect()
}

/// Resolves `url` against `base` with standard URL-join semantics.
///
/// Absolute URLs come back unchanged; relative ones are joined.
pub fn resolve_url(base: &Url, url: &str) -> Result<Url, url::ParseError> {
    base.join(url)
}

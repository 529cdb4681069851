//! Slug and route-segment normalization.
//!
//! Both the detail resolver and the sitemap key off these functions, so an
//! item link emitted by one is always resolvable by the other.

/// Decode `%XX` escapes.
///
/// Malformed escapes (`%`, `%4`, `%zz`) are kept literally rather than
/// rejected, and byte sequences that are not valid UTF-8 are replaced.
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let h1 = bytes[i + 1] as char;
            let h2 = bytes[i + 2] as char;
            if let (Some(a), Some(b)) = (h1.to_digit(16), h2.to_digit(16)) {
                out.push(((a << 4) + b) as u8);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Percent-encode a single path component.
///
/// Leaves the same characters untouched as JavaScript's
/// `encodeURIComponent`: ASCII alphanumerics and `- _ . ! ~ * ' ( )`.
pub fn percent_encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(b as char),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

/// Normalize a slug for lookup: percent-decode, then lower-case.
pub fn normalize_slug(raw: &str) -> String {
    percent_decode(raw).to_lowercase()
}

/// Route segment for a category page: lower-cased, whitespace runs collapsed
/// to a single `-`.
pub fn category_route_segment(category: &str) -> String {
    category
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Does a raw (possibly percent-encoded) route parameter name this category?
///
/// Accepts either the plain category name or its route segment, both
/// compared case-insensitively after decoding.
pub fn category_matches_route(category: &str, raw_param: &str) -> bool {
    let wanted = percent_decode(raw_param).to_lowercase();
    if wanted.is_empty() {
        return false;
    }
    category.to_lowercase() == wanted || category_route_segment(category) == wanted
}

#[cfg(test)]
#[path = "tests/slug_tests.rs"]
mod tests;

//! Public-id normalization for uploads.

/// Normalize a user-supplied public id into a storage-safe key.
///
/// In order: strip a trailing filename extension (the last `.` and what
/// follows, unless a `/` comes after it), replace every character outside
/// `[A-Za-z0-9_/-]` with `_`, collapse runs of `_`, and trim leading and
/// trailing `_`.
///
/// The result may be empty when the input was entirely disallowed
/// characters; callers treat an empty result as "no explicit id
/// requested" and let the store auto-assign one.
///
/// # Examples
///
/// ```
/// use cumulus_core::sanitize_public_id;
///
/// assert_eq!(sanitize_public_id("photo.JPG"), "photo");
/// assert_eq!(sanitize_public_id("a b/c!!d"), "a_b/c_d");
/// ```
pub fn sanitize_public_id(raw: &str) -> String {
    let stem = match raw.rfind('.') {
        // A '/' after the last dot means the dot is part of a folder name,
        // not an extension.
        Some(idx) if !raw[idx + 1..].contains('/') => &raw[..idx],
        _ => raw,
    };

    let mut out = String::with_capacity(stem.len());
    let mut last_was_underscore = false;
    for ch in stem.chars() {
        let mapped = if ch.is_ascii_alphanumeric() || matches!(ch, '_' | '/' | '-') {
            ch
        } else {
            '_'
        };
        if mapped == '_' {
            if !last_was_underscore {
                out.push('_');
            }
            last_was_underscore = true;
        } else {
            out.push(mapped);
            last_was_underscore = false;
        }
    }

    out.trim_matches('_').to_string()
}

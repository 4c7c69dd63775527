//! Transformation string assembly.

/// Join explicit transform directives with an output-format override.
///
/// Directives come first and the format directive (`f_<format>`) is
/// appended last, comma-separated only when both parts are present.
/// Returns `None` when neither part is given, meaning the untransformed
/// URLs should be served as-is.
///
/// # Examples
///
/// ```
/// use cumulus_core::build_transformation;
///
/// assert_eq!(
///     build_transformation(Some("w_300,h_300,c_fill"), Some("webp")),
///     Some("w_300,h_300,c_fill,f_webp".to_string()),
/// );
/// assert_eq!(build_transformation(None, Some("webp")), Some("f_webp".to_string()));
/// assert_eq!(build_transformation(None, None), None);
/// ```
pub fn build_transformation(transformation: Option<&str>, format: Option<&str>) -> Option<String> {
    let directives = transformation.map(str::trim).filter(|s| !s.is_empty());
    let format = format.map(str::trim).filter(|s| !s.is_empty());

    match (directives, format) {
        (Some(t), Some(f)) => Some(format!("{},f_{}", t, f)),
        (Some(t), None) => Some(t.to_string()),
        (None, Some(f)) => Some(format!("f_{}", f)),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_then_format() {
        assert_eq!(
            build_transformation(Some("w_300,h_300,c_fill"), Some("webp")),
            Some("w_300,h_300,c_fill,f_webp".to_string()),
        );
    }

    #[test]
    fn directives_alone() {
        assert_eq!(
            build_transformation(Some("c_thumb,g_face"), None),
            Some("c_thumb,g_face".to_string()),
        );
    }

    #[test]
    fn format_alone_has_no_leading_comma() {
        assert_eq!(build_transformation(None, Some("avif")), Some("f_avif".to_string()));
    }

    #[test]
    fn empty_and_blank_inputs_yield_none() {
        assert_eq!(build_transformation(None, None), None);
        assert_eq!(build_transformation(Some(""), Some("  ")), None);
    }
}

//! Image URL normalization
//!
//! The backend returns product and store images as a mix of absolute URLs,
//! host-relative paths and, occasionally, URLs with a doubled scheme letter
//! (`hhttps://`). Everything displayed goes through [`image_url`].

const MALFORMED_HTTPS: &str = "hhttps://";

/// Resolve a possibly relative or malformed image path against `base_url`.
///
/// Returns `None` for absent or blank input.
///
/// ```
/// use sm_shared::utils::image::image_url;
///
/// let base = "https://cdn.example.com/";
/// assert_eq!(image_url(base, Some("hhttps://x.com/a.png")).as_deref(), Some("https://x.com/a.png"));
/// assert_eq!(image_url(base, Some("/p/a.png")).as_deref(), Some("https://cdn.example.com/p/a.png"));
/// assert_eq!(image_url(base, Some("")), None);
/// ```
pub fn image_url(base_url: &str, path: Option<&str>) -> Option<String> {
    let path = path?.trim();
    if path.is_empty() {
        return None;
    }

    if let Some(rest) = path.strip_prefix(MALFORMED_HTTPS) {
        return Some(format!("https://{}", rest));
    }

    if path.starts_with("http://") || path.starts_with("https://") {
        return Some(path.to_string());
    }

    let relative = path.strip_prefix('/').unwrap_or(path);
    Some(format!("{}{}", base_url, relative))
}

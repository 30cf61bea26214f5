//! URL helpers for building server endpoint addresses.
//!
//! The server URL comes from flags, the environment or the config file, so it
//! may or may not carry a trailing slash.

/// Strip trailing slashes from a server base URL.
///
/// # Examples
///
/// ```
/// use pdfchat::utils::url::normalize_base_url;
///
/// assert_eq!(normalize_base_url("http://localhost:8000"), "http://localhost:8000");
/// assert_eq!(normalize_base_url("http://localhost:8000/"), "http://localhost:8000");
/// assert_eq!(normalize_base_url("http://localhost:8000///"), "http://localhost:8000");
/// ```
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Join a server base URL and an endpoint path with exactly one slash.
///
/// # Examples
///
/// ```
/// use pdfchat::utils::url::construct_api_url;
///
/// assert_eq!(
///     construct_api_url("http://localhost:8000", "upload-pdf"),
///     "http://localhost:8000/upload-pdf"
/// );
/// assert_eq!(
///     construct_api_url("http://localhost:8000/", "/chat"),
///     "http://localhost:8000/chat"
/// );
/// ```
pub fn construct_api_url(base_url: &str, endpoint: &str) -> String {
    let normalized_base = normalize_base_url(base_url);
    let endpoint = endpoint.trim_start_matches('/');
    format!("{}/{}", normalized_base, endpoint)
}

/// Check that a user-supplied server URL is an absolute http(s) URL.
pub fn validate_server_url(candidate: &str) -> Result<String, String> {
    let normalized = normalize_base_url(candidate);
    match reqwest::Url::parse(&normalized) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => {
            Ok(normalized)
        }
        Ok(url) => Err(format!(
            "Unsupported server URL '{candidate}': expected http or https, got {}",
            url.scheme()
        )),
        Err(e) => Err(format!("Invalid server URL '{candidate}': {e}")),
    }
}

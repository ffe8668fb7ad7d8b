//! URL utilities for consistent URL handling
//!
//! This module provides utilities for normalizing base URLs and building
//! Gemini model endpoints without doubled or missing slashes.

/// Normalize a base URL by removing trailing slashes
///
/// # Examples
///
/// ```
/// use gemchat::utils::url::normalize_base_url;
///
/// assert_eq!(normalize_base_url("https://example.com/v1beta"), "https://example.com/v1beta");
/// assert_eq!(normalize_base_url("https://example.com/v1beta///"), "https://example.com/v1beta");
/// ```
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Build the streaming generation endpoint for a model, requesting SSE framing.
///
/// # Examples
///
/// ```
/// use gemchat::utils::url::stream_generate_url;
///
/// assert_eq!(
///     stream_generate_url("https://example.com/v1beta/", "gemini-2.0-flash"),
///     "https://example.com/v1beta/models/gemini-2.0-flash:streamGenerateContent?alt=sse"
/// );
/// ```
pub fn stream_generate_url(base_url: &str, model: &str) -> String {
    format!(
        "{}/models/{}:streamGenerateContent?alt=sse",
        normalize_base_url(base_url),
        model
    )
}

//! Path builders for the TVmaze API
//!
//! Paths are relative to the client's base URL.

/// Builds the show search path for a query
///
/// The query is percent-encoded.
///
/// # Example
/// ```
/// use tvmaze_core::url::build_search_path;
/// assert_eq!(build_search_path("doctor who"), "/search/shows?q=doctor%20who");
/// ```
pub fn build_search_path(query: &str) -> String {
    format!("/search/shows?q={}", urlencoding::encode(query))
}

/// Builds the episode list path for a show
///
/// # Example
/// ```
/// use tvmaze_core::url::build_episodes_path;
/// assert_eq!(build_episodes_path(123), "/shows/123/episodes");
/// ```
pub fn build_episodes_path(show_id: u32) -> String {
    format!("/shows/{}/episodes", show_id)
}

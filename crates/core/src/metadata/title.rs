use super::domain::domain_title;
use super::html::PageMetadata;

/// Titles served by interstitial pages (bot challenges, loading screens).
///
/// Compared case-insensitively after trimming. The empty title counts as a
/// placeholder.
pub const PLACEHOLDER_TITLES: [&str; 4] = ["just a moment...", "loading...", "please wait...", ""];

/// Returns true if `title` is an interstitial placeholder.
pub fn is_placeholder_title(title: &str) -> bool {
    let normalized = title.trim().to_lowercase();
    PLACEHOLDER_TITLES.contains(&normalized.as_str())
}

/// Title used when the page could not be fetched or parsed: the capitalized
/// domain, or the url itself when it has no domain.
pub fn fallback_title(url: &str) -> String {
    domain_title(url).unwrap_or_else(|| url.to_string())
}

/// Picks the bookmark title from a parsed page.
///
/// - a real `<title>` is used as is
/// - a placeholder `<title>` falls back to `og:title`, then `<meta name="title">`,
///   then the domain
/// - a page without any `<title>` element yields the url
pub fn resolve_title(page: &PageMetadata, url: &str) -> String {
    match page.title.as_deref() {
        None => url.to_string(),
        Some(title) if !is_placeholder_title(title) => title.to_string(),
        Some(_) => page
            .og_title
            .clone()
            .or_else(|| page.meta_title.clone())
            .unwrap_or_else(|| fallback_title(url)),
    }
}

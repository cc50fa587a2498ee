use url::Url;

/// Icon size requested from the favicon service, in pixels.
pub const FAVICON_SIZE: u32 = 128;

/// Domain used when a url has no parseable domain.
pub const FAVICON_PLACEHOLDER_DOMAIN: &str = "example.com";

/// Extracts the domain of a url, without a leading `www.`.
///
/// Non-default ports are kept (`localhost:8080`). Returns `None` when the url
/// does not parse or has no host.
pub fn domain_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str().filter(|h| !h.is_empty())?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    match parsed.port() {
        Some(port) => Some(format!("{host}:{port}")),
        None => Some(host.to_string()),
    }
}

/// The capitalized domain, used as a last-resort title.
pub fn domain_title(url: &str) -> Option<String> {
    domain_of(url).map(|domain| capitalize(&domain))
}

/// Builds the favicon service url for the domain of `url`.
///
/// # Examples
///
/// ```
/// use bookmarks_core::metadata::favicon_url;
///
/// assert_eq!(
///     favicon_url("https://www.example.com/page"),
///     "https://www.google.com/s2/favicons?domain=example.com&sz=128"
/// );
/// ```
pub fn favicon_url(url: &str) -> String {
    let domain = domain_of(url).unwrap_or_else(|| FAVICON_PLACEHOLDER_DOMAIN.to_string());
    format!("https://www.google.com/s2/favicons?domain={domain}&sz={FAVICON_SIZE}")
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

//! Page metadata derivation.
//!
//! Parsing and decision logic for bookmark titles and favicons. Network access
//! goes through the [`PageFetcher`] trait, implemented by the server.

mod domain;
mod fetcher;
mod html;
mod title;

pub use domain::{domain_of, domain_title, favicon_url, FAVICON_PLACEHOLDER_DOMAIN, FAVICON_SIZE};
pub use fetcher::{FetchError, PageFetcher};
pub use html::{parse_page, PageMetadata};
pub use title::{fallback_title, is_placeholder_title, resolve_title, PLACEHOLDER_TITLES};

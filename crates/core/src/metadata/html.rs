//! Lightweight HTML metadata extraction.
//!
//! Only the `<title>` element and `<meta>` tags are needed, so the document is
//! scanned with regular expressions instead of building a DOM.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<title\b[^>]*>(.*?)</title\s*>").expect("title pattern is valid")
});

static META_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<meta\b([^>]*)>").expect("meta pattern is valid"));

static ATTRIBUTE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)([^\s=/>"']+)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#)
        .expect("attribute pattern is valid")
});

static ENTITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);").expect("entity pattern is valid")
});

/// Title candidates found in a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageMetadata {
    /// Text of the first `<title>` element, trimmed. `None` when absent.
    pub title: Option<String>,
    /// Non-empty `content` of the first `<meta property="og:title">`.
    pub og_title: Option<String>,
    /// Non-empty `content` of the first `<meta name="title">`.
    pub meta_title: Option<String>,
}

/// Extracts title candidates from an HTML document.
pub fn parse_page(html: &str) -> PageMetadata {
    let title = TITLE_PATTERN
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| decode_entities(m.as_str()).trim().to_string());

    let mut og_title = None;
    let mut meta_title = None;

    for meta in META_PATTERN.captures_iter(html) {
        let Some(attributes) = meta.get(1) else {
            continue;
        };
        let attributes = parse_attributes(attributes.as_str());
        let Some(content) = attribute(&attributes, "content")
            .map(|c| decode_entities(c).trim().to_string())
            .filter(|c| !c.is_empty())
        else {
            continue;
        };

        if og_title.is_none() && attribute_is(&attributes, "property", "og:title") {
            og_title = Some(content);
        } else if meta_title.is_none() && attribute_is(&attributes, "name", "title") {
            meta_title = Some(content);
        }

        if og_title.is_some() && meta_title.is_some() {
            break;
        }
    }

    PageMetadata {
        title,
        og_title,
        meta_title,
    }
}

fn parse_attributes(raw: &str) -> Vec<(String, &str)> {
    ATTRIBUTE_PATTERN
        .captures_iter(raw)
        .filter_map(|c| {
            let name = c.get(1)?.as_str().to_ascii_lowercase();
            let value = c.get(2).or_else(|| c.get(3)).or_else(|| c.get(4))?;
            Some((name, value.as_str()))
        })
        .collect()
}

fn attribute<'a>(attributes: &[(String, &'a str)], name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, value)| *value)
}

fn attribute_is(attributes: &[(String, &str)], name: &str, expected: &str) -> bool {
    attribute(attributes, name).is_some_and(|v| v.trim().eq_ignore_ascii_case(expected))
}

/// Decodes named and numeric character references.
///
/// Unknown named entities are left untouched.
fn decode_entities(text: &str) -> String {
    ENTITY_PATTERN
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[1];
            let decoded = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some('\u{a0}'),
                _ => entity.strip_prefix('#').and_then(|number| {
                    let code = match number.strip_prefix(['x', 'X']) {
                        Some(hex) => u32::from_str_radix(hex, 16).ok(),
                        None => number.parse().ok(),
                    };
                    code.and_then(char::from_u32)
                }),
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

//! Tag aggregation across bookmarks.

use std::collections::BTreeSet;

use serde_json::Value;

/// Collects the unique tags from serialized tag cells, sorted.
///
/// Each cell should hold a JSON array of strings. Cells that fail to parse or
/// are not arrays are skipped, as are non-string array members.
///
/// # Examples
///
/// ```
/// use bookmarks_core::tags::collect_tags;
///
/// let tags = collect_tags([r#"["a", "b"]"#, r#"["b", "c"]"#]);
/// assert_eq!(tags, vec!["a", "b", "c"]);
/// ```
pub fn collect_tags<I, S>(cells: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut unique = BTreeSet::new();

    for cell in cells {
        let Ok(Value::Array(items)) = serde_json::from_str::<Value>(cell.as_ref()) else {
            continue;
        };
        unique.extend(items.into_iter().filter_map(|item| match item {
            Value::String(tag) => Some(tag),
            _ => None,
        }));
    }

    unique.into_iter().collect()
}

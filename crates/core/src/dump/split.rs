use super::types::DumpStatement;

/// Maximum characters of a failing statement echoed back to the caller.
pub const STATEMENT_PREVIEW_CHARS: usize = 100;

/// Splits a dump into executable statements.
///
/// Fragments are separated by `;`. Leading `--` comment lines are dropped from
/// each fragment and fragments left empty are discarded, so a comment header
/// never hides the statement that follows it.
pub fn split_statements(dump: &str) -> Vec<DumpStatement> {
    dump.split(';')
        .map(strip_leading_comments)
        .filter(|sql| !sql.is_empty())
        .map(DumpStatement::new)
        .collect()
}

/// Shortens a statement for error reports, marking the cut with `...`.
pub fn truncate_statement(sql: &str) -> String {
    match sql.char_indices().nth(STATEMENT_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &sql[..cut]),
        None => sql.to_string(),
    }
}

fn strip_leading_comments(fragment: &str) -> &str {
    let mut rest = fragment.trim();
    while rest.starts_with("--") {
        rest = match rest.split_once('\n') {
            Some((_, tail)) => tail.trim(),
            None => "",
        };
    }
    rest
}

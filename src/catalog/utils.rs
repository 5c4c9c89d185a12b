//! Text normalization shared by the equality rules of several object kinds.

/// Trim every line and drop the blank ones, keeping line breaks.
///
/// Used for comment comparison, where a reformatted comment must not count as a change.
pub fn trim_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .fold(String::new(), |mut acc, line| {
            acc.push_str(line);
            acc.push('\n');
            acc
        })
}

/// Trim every line, drop the blank ones and concatenate the rest without separators.
pub fn text_for_diff(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Normalize stored program source so cosmetic edits compare equal.
///
/// Each line is trimmed, whitespace runs collapse to a single space, letters are
/// lowercased, double quotes are removed and `" ("` becomes `"("`. Blank lines are
/// skipped, and so are `--` comment lines when `ignore_comments` is set.
pub fn source_for_diff(lines: &[String], ignore_comments: bool) -> Vec<String> {
    lines
        .iter()
        .map(|line| normalize_source_line(line))
        .filter(|line| !line.is_empty())
        .filter(|line| !(ignore_comments && line.starts_with("--")))
        .collect()
}

fn normalize_source_line(line: &str) -> String {
    line.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .replace('"', "")
        .replace(" (", "(")
}

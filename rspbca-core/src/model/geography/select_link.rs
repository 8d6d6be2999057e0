//! parsing of the assignment model's select-link files. the first line is a
//! header; each following line selects one directed link as `l=<inode>,<jnode>`.

use super::GeographyError;

/// parses one select-link line into (inode, jnode). `line` is the 1-based
/// line number used for error reporting.
pub fn parse_select_link_line(
    text: &str,
    file: &str,
    line: usize,
) -> Result<(i64, i64), GeographyError> {
    let malformed = || GeographyError::MalformedSelectLink {
        file: file.to_string(),
        line,
        text: text.to_string(),
    };
    let body = text.trim();
    let body = body.strip_prefix("l=").unwrap_or(body);
    let mut parts = body.split(',').map(str::trim);
    let i_node = parts
        .next()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or_else(malformed)?;
    let j_node = parts
        .next()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or_else(malformed)?;
    Ok((i_node, j_node))
}

/// parses the full contents of a select-link file, skipping the header line
/// and any blank lines.
pub fn parse_select_link_file(contents: &str, file: &str) -> Result<Vec<(i64, i64)>, GeographyError> {
    contents
        .lines()
        .enumerate()
        .skip(1)
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(idx, text)| parse_select_link_line(text, file, idx + 1))
        .collect()
}

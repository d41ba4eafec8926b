//! Source text position utilities
//!
//! Byte offset helpers shared by the rewriters, the import rewriter and the
//! pruner. All offsets are byte offsets into the original source, matching
//! tree-sitter's `start_byte`/`end_byte`.

/// Convert a byte offset to a 1-based (line, column) pair.
///
/// Columns are byte based, like tree-sitter positions + 1.
pub fn offset_to_position(source: &str, offset: usize) -> (u32, u32) {
    let offset = offset.min(source.len());
    let before = &source.as_bytes()[..offset];
    let line = before.iter().filter(|&&b| b == b'\n').count() as u32 + 1;
    let line_start = before.iter().rposition(|&b| b == b'\n').map_or(0, |i| i + 1);
    (line, (offset - line_start) as u32 + 1)
}

/// Byte offset of the start of the line containing `offset`.
pub fn line_start(source: &str, offset: usize) -> usize {
    let offset = offset.min(source.len());
    source.as_bytes()[..offset]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |i| i + 1)
}

/// Leading whitespace of the line containing `offset`.
pub fn line_indent(source: &str, offset: usize) -> &str {
    let start = line_start(source, offset);
    let rest = &source[start..];
    let width = rest
        .bytes()
        .take_while(|&b| b == b' ' || b == b'\t')
        .count();
    &rest[..width]
}

/// Widen a statement range so that removing it also removes its line.
///
/// The start moves back to the line start when only whitespace precedes the
/// statement; the end swallows trailing spaces and one line break when the
/// statement is the last thing on its line.
pub fn statement_removal_range(source: &str, start: usize, end: usize) -> (usize, usize) {
    let bytes = source.as_bytes();
    let ls = line_start(source, start);
    let only_ws_before = bytes[ls..start].iter().all(|&b| b == b' ' || b == b'\t');

    let mut new_end = end;
    while new_end < bytes.len() && (bytes[new_end] == b' ' || bytes[new_end] == b'\t') {
        new_end += 1;
    }
    let at_line_end = new_end >= bytes.len() || bytes[new_end] == b'\n' || bytes[new_end] == b'\r';

    if !(only_ws_before && at_line_end) {
        return (start, end);
    }

    if new_end < bytes.len() && bytes[new_end] == b'\r' {
        new_end += 1;
    }
    if new_end < bytes.len() && bytes[new_end] == b'\n' {
        new_end += 1;
    }
    (ls, new_end)
}

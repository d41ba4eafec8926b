//! Planned source edits.
//!
//! Rewriters never mutate the tree. They plan byte-range edits against the
//! original text, and all edits for a pass are spliced in one go. An edit
//! range is `[start, end)` in bytes; `start == end` is an insertion.

use std::ops::Range;
use thiserror::Error;

/// One planned replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl Edit {
    pub fn replace(start: usize, end: usize, text: impl Into<String>) -> Self {
        Edit { start, end, text: text.into() }
    }

    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Edit { start: at, end: at, text: text.into() }
    }

    pub fn delete(start: usize, end: usize) -> Self {
        Edit { start, end, text: String::new() }
    }
}

/// Errors that can occur when applying edits.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EditError {
    /// Two edits partially overlap, making the splice ambiguous.
    #[error("overlapping edits at {first:?} and {second:?}, splice is ambiguous")]
    Overlapping { first: (usize, usize), second: (usize, usize) },
    /// An edit points outside the source.
    #[error("edit {start}..{end} is out of bounds (source is {len} bytes)")]
    OutOfBounds { start: usize, end: usize, len: usize },
}

/// Splice `edits` into `source`.
///
/// Edits are applied in ascending position order (insertions at the same
/// offset keep their planning order). An edit fully contained in an
/// earlier replacement is discarded, since the outer edit already rewrote
/// that region. Partial overlaps are an error.
pub fn apply_edits(source: &str, edits: &[Edit]) -> Result<String, EditError> {
    if edits.is_empty() {
        return Ok(source.to_string());
    }

    for e in edits {
        if e.start > e.end || e.end > source.len() || !source.is_char_boundary(e.start) || !source.is_char_boundary(e.end) {
            return Err(EditError::OutOfBounds { start: e.start, end: e.end, len: source.len() });
        }
    }

    // Insertions sort before a replacement starting at the same offset, wider
    // replacements before narrower ones. Stable sort keeps planning order
    // for identical positions.
    let mut sorted: Vec<&Edit> = edits.iter().collect();
    sorted.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then((a.start != a.end).cmp(&(b.start != b.end)))
            .then(b.end.cmp(&a.end))
    });

    // Drop exact duplicates and edits nested inside an earlier replacement
    let mut kept: Vec<&Edit> = Vec::with_capacity(sorted.len());
    for e in sorted {
        if let Some(prev) = kept.last() {
            if *prev == e {
                continue;
            }
            if e.start < prev.end {
                if e.end <= prev.end {
                    continue;
                }
                return Err(EditError::Overlapping {
                    first: (prev.start, prev.end),
                    second: (e.start, e.end),
                });
            }
        }
        kept.push(e);
    }

    let mut result = String::with_capacity(source.len());
    let mut last_end = 0;
    for e in kept {
        result.push_str(&source[last_end..e.start]);
        result.push_str(&e.text);
        last_end = e.end;
    }
    result.push_str(&source[last_end..]);
    Ok(result)
}

/// Rewritten text of `source[range]`: the edits lying inside `range` are
/// spliced into that slice, the others ignored.
pub fn apply_within(source: &str, range: Range<usize>, edits: &[Edit]) -> Result<String, EditError> {
    let shifted: Vec<Edit> = edits
        .iter()
        .filter(|e| e.start >= range.start && e.end <= range.end)
        .map(|e| Edit::replace(e.start - range.start, e.end - range.start, e.text.clone()))
        .collect();
    let slice = source
        .get(range.clone())
        .ok_or(EditError::OutOfBounds { start: range.start, end: range.end, len: source.len() })?;
    apply_edits(slice, &shifted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_single() {
        let out = apply_edits(r#"{"key": "old"}"#, &[Edit::replace(8, 13, "\"new\"")]).unwrap();
        assert_eq!(out, r#"{"key": "new"}"#);
    }

    #[test]
    fn test_apply_multiple_unsorted() {
        let edits = vec![Edit::replace(8, 11, "xxx"), Edit::replace(0, 3, "yyy")];
        assert_eq!(apply_edits("aaa bbb aaa", &edits).unwrap(), "yyy bbb xxx");
    }

    #[test]
    fn test_insertions_keep_planning_order() {
        let edits = vec![Edit::insert(3, "1"), Edit::insert(3, "2")];
        assert_eq!(apply_edits("abcdef", &edits).unwrap(), "abc12def");
    }

    #[test]
    fn test_nested_edit_is_discarded() {
        let edits = vec![Edit::replace(2, 4, "XX"), Edit::replace(0, 6, "whole")];
        assert_eq!(apply_edits("abcdefgh", &edits).unwrap(), "wholegh");
    }

    #[test]
    fn test_partial_overlap_is_an_error() {
        let edits = vec![Edit::replace(0, 4, "x"), Edit::replace(2, 6, "y")];
        assert!(matches!(
            apply_edits("abcdefgh", &edits),
            Err(EditError::Overlapping { .. })
        ));
    }

    #[test]
    fn test_duplicate_edits_apply_once() {
        let edits = vec![Edit::replace(0, 5, "world"), Edit::replace(0, 5, "world")];
        assert_eq!(apply_edits("hello", &edits).unwrap(), "world");
    }

    #[test]
    fn test_out_of_bounds() {
        assert!(matches!(
            apply_edits("ab", &[Edit::delete(1, 5)]),
            Err(EditError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_apply_within_range() {
        let edits = vec![Edit::replace(0, 1, "A"), Edit::replace(4, 5, "E"), Edit::insert(6, "!"), Edit::replace(7, 8, "H")];
        assert_eq!(apply_within("abcdefgh", 3..7, &edits).unwrap(), "dEf!g");
    }

    #[test]
    fn test_adjacent_edits() {
        let edits = vec![Edit::replace(0, 2, "X"), Edit::insert(2, "-"), Edit::replace(2, 4, "Y")];
        assert_eq!(apply_edits("abcd", &edits).unwrap(), "X-Y");
    }
}

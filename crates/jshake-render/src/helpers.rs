//! Comment-aware text scanning used by the renderer.
//!
//! Statement boundaries are line breaks, but a line break inside a block
//! comment does not end a statement's line, and a `:` or `default` inside a
//! comment is not a case label. These helpers skip comment interiors while
//! searching.

use memchr::{memchr, memmem};

use crate::patched::PatchedSource;

/// Position just past the first line break in `code` that is not inside a
/// block comment, or `None` when there is no such line break (including the
/// unterminated-comment case).
pub fn find_first_line_break_outside_comment(code: &str) -> Option<usize> {
    let bytes = code.as_bytes();
    let mut line_break = memchr(b'\n', bytes);
    let mut start = 0;
    loop {
        let found = line_break?;
        let Some(slash) = memchr(b'/', &bytes[start..]).map(|offset| offset + start) else {
            return Some(found + 1);
        };
        if slash > found {
            return Some(found + 1);
        }
        match bytes.get(slash + 1) {
            // A line comment ends at the line break it contains.
            Some(b'/') => return Some(found + 1),
            Some(b'*') => {
                let close = memmem::find(&bytes[slash + 2..], b"*/")?;
                start = slash + 2 + close + 2;
                if start > found {
                    line_break = memchr(b'\n', &bytes[start..]).map(|offset| offset + start);
                }
            }
            _ => start = slash + 1,
        }
    }
}

/// First occurrence of `needle` at or after `from` that is not inside a
/// comment.
pub fn find_first_occurrence_outside_comment(
    code: &str,
    needle: &str,
    from: usize,
) -> Option<usize> {
    let bytes = code.as_bytes();
    let finder = memmem::Finder::new(needle.as_bytes());
    let mut found = finder.find(&bytes[from..]).map(|offset| offset + from);
    let mut start = from;
    loop {
        let target = found?;
        let Some(slash) = memchr(b'/', &bytes[start..]).map(|offset| offset + start) else {
            return Some(target);
        };
        if slash >= target {
            return Some(target);
        }
        match bytes.get(slash + 1) {
            Some(b'/') => {
                start = memchr(b'\n', &bytes[slash + 2..]).map(|offset| offset + slash + 3)?;
            }
            Some(b'*') => {
                start = memmem::find(&bytes[slash + 2..], b"*/")
                    .map(|offset| offset + slash + 4)?;
            }
            _ => start = slash + 1,
        }
        if start > target {
            found = finder.find(&bytes[start..]).map(|offset| offset + start);
        }
    }
}

/// Drop an excluded node together with its share of surrounding whitespace.
#[inline]
pub fn treeshake_node(code: &mut PatchedSource, start: u32, end: u32) {
    code.remove(start, end);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_break_in_plain_code() {
        assert_eq!(find_first_line_break_outside_comment("ab\ncd"), Some(3));
    }

    #[test]
    fn no_line_break() {
        assert_eq!(find_first_line_break_outside_comment("abcd"), None);
    }

    #[test]
    fn line_break_inside_block_comment_is_skipped() {
        let code = "a /* x\n y */ b\nc";
        assert_eq!(find_first_line_break_outside_comment(code), Some(15));
    }

    #[test]
    fn line_break_ending_a_line_comment_counts() {
        let code = "a // x\nb";
        assert_eq!(find_first_line_break_outside_comment(code), Some(7));
    }

    #[test]
    fn unterminated_block_comment_has_no_line_break() {
        assert_eq!(find_first_line_break_outside_comment("a /* x\nb"), None);
    }

    #[test]
    fn occurrence_in_plain_code() {
        assert_eq!(
            find_first_occurrence_outside_comment("case 1: x", ":", 0),
            Some(6)
        );
    }

    #[test]
    fn occurrence_inside_block_comment_is_skipped() {
        let code = "case /* : */ 1: x";
        assert_eq!(find_first_occurrence_outside_comment(code, ":", 0), Some(14));
    }

    #[test]
    fn occurrence_inside_line_comment_is_skipped() {
        let code = "default // :\n: x";
        assert_eq!(find_first_occurrence_outside_comment(code, ":", 7), Some(13));
    }

    #[test]
    fn occurrence_respects_the_search_start() {
        let code = "a: b: c";
        assert_eq!(find_first_occurrence_outside_comment(code, ":", 2), Some(4));
    }

    #[test]
    fn division_slash_does_not_start_a_comment() {
        let code = "a / b: c";
        assert_eq!(find_first_occurrence_outside_comment(code, ":", 0), Some(5));
    }
}

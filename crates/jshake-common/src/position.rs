//! Offset to line/column mapping for diagnostics.

use memchr::memchr_iter;

/// A 1-based line / 0-based column source location.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

/// Precomputed line-start table for a source text.
///
/// Built once per module; `location` is a binary search over line starts.
pub struct LineMap {
    /// Byte offset of the first character of each line. Always starts with 0.
    line_starts: Vec<u32>,
}

impl LineMap {
    pub fn new(source: &str) -> Self {
        let mut line_starts = Vec::with_capacity(128);
        line_starts.push(0);
        for pos in memchr_iter(b'\n', source.as_bytes()) {
            line_starts.push(pos as u32 + 1);
        }
        Self { line_starts }
    }

    pub fn location(&self, offset: u32) -> Location {
        let line_index = match self.line_starts.binary_search(&offset) {
            Ok(index) => index,
            Err(index) => index - 1,
        };
        Location {
            line: line_index as u32 + 1,
            column: offset - self.line_starts[line_index],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locates_offsets_across_lines() {
        let map = LineMap::new("const a = 1;\nconst b = 2;\n");
        assert_eq!(map.location(0), Location { line: 1, column: 0 });
        assert_eq!(map.location(6), Location { line: 1, column: 6 });
        assert_eq!(map.location(13), Location { line: 2, column: 0 });
        assert_eq!(map.location(19), Location { line: 2, column: 6 });
    }

    #[test]
    fn single_line_source() {
        let map = LineMap::new("x()");
        assert_eq!(map.location(2), Location { line: 1, column: 2 });
    }
}

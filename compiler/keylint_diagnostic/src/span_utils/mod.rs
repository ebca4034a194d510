//! Byte offset to line/column conversion.
//!
//! For repeated lookups on the same source, build a [`LineOffsetTable`]
//! once; each lookup is then a binary search over line starts.

use keylint_ir::Span;

/// Pre-computed line start offsets for one source text.
///
/// ```
/// use keylint_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "class A {\n  Set<int[]> s;\n}";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 12), (2, 3));
/// assert_eq!(table.offset_to_line_col(source, 26), (3, 1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// `offsets[i]` is the byte offset where line `i + 1` starts.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    /// Build a table by scanning the source once.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                // Offsets past u32::MAX cannot appear in a Span either.
                let Ok(next) = u32::try_from(i + 1) else {
                    break;
                };
                offsets.push(next);
            }
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// 1-based (line, column) for `offset`.
    ///
    /// Columns count characters, not bytes.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self
            .offsets
            .get((line - 1) as usize)
            .copied()
            .unwrap_or(0) as usize;
        let end = (offset as usize).min(source.len());

        let col = source
            .get(line_start..end)
            .map_or(0, |text| text.chars().count());
        (line, u32::try_from(col).unwrap_or(u32::MAX - 1) + 1)
    }

    /// Byte offset where a 1-based line starts.
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.offsets.get((line - 1) as usize).copied()
    }

    /// Number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

/// 1-based (line, column) of a span's start, scanning the source once.
///
/// Prefer [`LineOffsetTable`] when converting many spans.
pub fn span_start_line_col(source: &str, span: Span) -> (u32, u32) {
    offset_to_line_col(source, span.start)
}

/// 1-based (line, column) from a byte offset by linear scan.
pub fn offset_to_line_col(source: &str, offset: u32) -> (u32, u32) {
    let offset = offset as usize;
    let mut line = 1u32;
    let mut line_start = 0usize;

    for (i, byte) in source.bytes().enumerate() {
        if i >= offset {
            break;
        }
        if byte == b'\n' {
            line += 1;
            line_start = i + 1;
        }
    }

    let col = source
        .get(line_start..offset.min(source.len()))
        .map_or(0, |text| text.chars().count());
    (line, u32::try_from(col).unwrap_or(u32::MAX - 1) + 1)
}

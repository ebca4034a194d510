//! Byte-offset spans into a unit's source text.

use std::fmt;
use std::ops::Range;

/// A range offset that does not fit the 32-bit span fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    #[error("span start {0} (0x{0:X}) does not fit in 32 bits")]
    StartTooLarge(usize),
    #[error("span end {0} (0x{0:X}) does not fit in 32 bits")]
    EndTooLarge(usize),
}

/// Half-open byte range `start..end` in the source of one unit.
///
/// Hosts without source positions use [`Span::DUMMY`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(C)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Narrow a `usize` range, failing on offsets past `u32::MAX`.
    pub fn try_from_range(range: Range<usize>) -> Result<Self, SpanError> {
        let Ok(start) = u32::try_from(range.start) else {
            return Err(SpanError::StartTooLarge(range.start));
        };
        let Ok(end) = u32::try_from(range.end) else {
            return Err(SpanError::EndTooLarge(range.end));
        };
        Ok(Span::new(start, end))
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }

    /// The covered text, `None` when the span is not inside `source` or
    /// splits a character.
    pub fn text<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.to_range())
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Span;
    crate::static_assert_size!(Span, 8);
}

//! Host-side collection of findings before they are rendered.
//!
//! Rules report every matching site; the queue is where a host decides
//! how much of that to show:
//! - positions are computed once, from source text, for sorting
//! - exact duplicates (same code, same primary span) can be dropped
//! - the number of stored findings can be capped

use std::collections::HashSet;

use keylint_ir::Span;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, LintCode, Severity};

/// How much of a unit's findings a queue keeps.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct QueueConfig {
    /// Stop storing after this many findings; 0 means no cap.
    pub limit: usize,
    /// Drop a finding whose code and primary span were already queued.
    pub deduplicate: bool,
}

impl Default for QueueConfig {
    fn default() -> Self {
        QueueConfig {
            limit: 0,
            deduplicate: true,
        }
    }
}

impl QueueConfig {
    /// No cap and no deduplication.
    pub fn unlimited() -> Self {
        QueueConfig {
            limit: 0,
            deduplicate: false,
        }
    }
}

/// A stored finding and its 1-based (line, column), the sort key.
#[derive(Clone, Debug)]
pub(crate) struct Entry {
    pub(crate) at: (u32, u32),
    pub(crate) diagnostic: Diagnostic,
}

/// Per-unit buffer between the rules and an emitter.
///
/// ```text
/// let mut queue = DiagnosticQueue::with_config(config);
/// queue.extend_with_source(findings, &unit.source);
/// for finding in queue.flush() { emitter.emit(&finding); }
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    entries: Vec<Entry>,
    seen: HashSet<(LintCode, Option<Span>)>,
    error_count: usize,
    warning_count: usize,
    dropped: usize,
    config: QueueConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: QueueConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Store `diag` at a position the caller already knows.
    ///
    /// Returns `false` when the limit or deduplication rejected it.
    pub fn add(&mut self, diag: Diagnostic, line: u32, column: u32) -> bool {
        if self.limit_reached() {
            self.dropped += 1;
            return false;
        }
        let key = (diag.code, diag.primary_span());
        if self.config.deduplicate && !self.seen.insert(key) {
            return false;
        }

        match diag.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
            Severity::Note | Severity::Help => {}
        }
        self.entries.push(Entry {
            at: (line, column),
            diagnostic: diag,
        });
        true
    }

    /// Like [`add`](Self::add), locating the primary label in `source`.
    /// Unlabeled findings sit at (1, 1).
    pub fn add_with_source(&mut self, diag: Diagnostic, source: &str) -> bool {
        let (line, column) = diag.primary_span().map_or((1, 1), |span| {
            crate::span_utils::offset_to_line_col(source, span.start)
        });
        self.add(diag, line, column)
    }

    /// Queue every finding of one unit; returns how many were kept.
    pub fn extend_with_source(
        &mut self,
        diags: impl IntoIterator<Item = Diagnostic>,
        source: &str,
    ) -> usize {
        let table = LineOffsetTable::build(source);
        diags
            .into_iter()
            .map(|diag| {
                let (line, column) = diag
                    .primary_span()
                    .map_or((1, 1), |span| table.offset_to_line_col(source, span.start));
                self.add(diag, line, column)
            })
            .filter(|&kept| kept)
            .count()
    }

    pub fn limit_reached(&self) -> bool {
        self.config.limit != 0 && self.entries.len() >= self.config.limit
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// Findings turned away by the limit since the last flush.
    pub fn dropped_count(&self) -> usize {
        self.dropped
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drain the queue in source order and reset its counters.
    ///
    /// Ties keep insertion order.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        self.entries.sort_by_key(|entry| entry.at);
        self.seen.clear();
        self.error_count = 0;
        self.warning_count = 0;
        self.dropped = 0;
        self.entries.drain(..).map(|entry| entry.diagnostic).collect()
    }

    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().map(|entry| &entry.diagnostic)
    }
}

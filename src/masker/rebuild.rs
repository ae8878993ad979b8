//! Interval rebuilder
//!
//! Applies the accumulated edit list to the original byte stream. Bytes
//! outside edited intervals are copied verbatim; protected spans never
//! appear in the edit list, so literal content survives byte-identical.

use crate::core::{MaskError, MaskResult, Span};
use tracing::warn;

/// What happens to the bytes covered by an edit's span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    /// Delete the span (comments).
    Drop,
    /// Substitute the span with the given text (identifier aliases).
    Replace(String),
}

/// One pending edit over the source bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub span: Span,
    pub action: EditAction,
}

impl Edit {
    pub fn drop(span: Span) -> Self {
        Self {
            span,
            action: EditAction::Drop,
        }
    }

    pub fn replace(span: Span, text: impl Into<String>) -> Self {
        Self {
            span,
            action: EditAction::Replace(text.into()),
        }
    }
}

/// Rebuild the byte stream with all edits applied.
///
/// Edits are sorted by `(start, end)` and applied left to right with a
/// cursor. An edit starting before the cursor overlaps an already applied
/// one and is skipped: first-applied-wins. Protected-span handling and
/// the classifier guarantee this never triggers for well-formed input, so
/// a skip is logged rather than silently dropped. Spans that do not fit
/// the buffer are a hard error since they can only come from an engine
/// bug.
pub fn apply_edits(source: &[u8], mut edits: Vec<Edit>) -> MaskResult<String> {
    edits.sort_by_key(|e| (e.span.start, e.span.end));

    let mut out = Vec::with_capacity(source.len());
    let mut cursor = 0usize;
    for edit in &edits {
        let Span { start, end } = edit.span;
        if start > end || end > source.len() {
            return Err(MaskError::InvalidSpan {
                start,
                end,
                len: source.len(),
            });
        }
        if start < cursor {
            warn!(span = %edit.span, "skipping edit overlapping an already applied interval");
            continue;
        }
        out.extend_from_slice(&source[cursor..start]);
        if let EditAction::Replace(text) = &edit.action {
            out.extend_from_slice(text.as_bytes());
        }
        cursor = end;
    }
    out.extend_from_slice(&source[cursor..]);

    Ok(String::from_utf8(out)?)
}

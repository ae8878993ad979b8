//! Protected-span collection
//!
//! Walks the tree once and records the byte ranges of string/char
//! literals. Anything inside a protected span is never classified,
//! replaced, or dropped.

use crate::core::Span;
use crate::parser::{Language, NodeKind};
use tree_sitter::Node;

/// Set of literal spans that masking must never touch.
#[derive(Debug, Default)]
pub struct ProtectedSpans {
    spans: Vec<Span>,
}

impl ProtectedSpans {
    /// Collect literal spans under `root`.
    ///
    /// Template strings contribute only their static fragments: each
    /// substitution range is carved out, so the expressions inside
    /// interpolation remain maskable while the literal text around them
    /// stays protected.
    pub fn collect(root: Node, language: Language) -> Self {
        let mut spans = Vec::new();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            match language.node_kind(node.kind()) {
                NodeKind::StringLiteral => {
                    spans.push(Span::of_node(&node));
                    // literal interiors hold no further maskable nodes
                    continue;
                }
                NodeKind::TemplateString => {
                    let mut holes = Vec::new();
                    let mut cursor = node.walk();
                    for child in node.children(&mut cursor) {
                        if language.node_kind(child.kind()) == NodeKind::TemplateSubstitution {
                            holes.push(Span::of_node(&child));
                            // substitution bodies may nest further literals
                            stack.push(child);
                        }
                    }
                    holes.sort();
                    spans.extend(Span::of_node(&node).subtract(&holes));
                    continue;
                }
                _ => {}
            }
            for i in (0..node.child_count()).rev() {
                if let Some(child) = node.child(i) {
                    stack.push(child);
                }
            }
        }
        Self { spans }
    }

    /// True if `span` touches any protected region.
    pub fn is_protected(&self, span: Span) -> bool {
        self.spans.iter().any(|p| p.overlaps(span))
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

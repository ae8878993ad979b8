//! Masking engine
//!
//! One invocation: parse, collect protected literal spans, walk the tree
//! once dropping comments and aliasing identifiers, rebuild the byte
//! stream, normalize whitespace. All state (alias table, counters, edit
//! list) is local to the call; snippets are embarrassingly parallel.

pub mod alias;
pub mod classify;
pub mod protected;
pub mod rebuild;
pub mod whitespace;

pub use alias::{AliasAllocator, AliasTable};
pub use classify::IdentifierRole;
pub use protected::ProtectedSpans;
pub use rebuild::{apply_edits, Edit, EditAction};
pub use whitespace::WhitespaceMode;

use crate::core::{MaskResult, Span};
use crate::parser::{Language, NodeKind, SourceParser};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Result of one masking invocation. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaskOutput {
    /// Canonicalized source: comments stripped, identifiers aliased,
    /// whitespace normalized, literals preserved verbatim.
    pub masked: String,
    /// Original identifier text to generated alias, in first-seen order.
    pub aliases: AliasTable,
}

/// Masking engine configured for one language.
#[derive(Debug, Clone, Copy)]
pub struct Masker {
    language: Language,
}

impl Masker {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Resolve a language tag (unknown tags fall back to C-family).
    pub fn for_tag(tag: &str) -> Self {
        Self::new(Language::from_tag(tag))
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Mask one snippet.
    ///
    /// Deterministic: identical source, language, and mode always produce
    /// identical output. Empty input is success with an empty result.
    pub fn mask(&self, source: &str, mode: WhitespaceMode) -> MaskResult<MaskOutput> {
        if source.is_empty() {
            return Ok(MaskOutput {
                masked: String::new(),
                aliases: AliasTable::new(),
            });
        }

        let bytes = source.as_bytes();
        let tree = SourceParser::new(self.language).parse(bytes)?;
        let protected = ProtectedSpans::collect(tree.root_node(), self.language);

        let mut allocator = AliasAllocator::new();
        let mut edits = Vec::new();

        // pre-order, children in source order, so alias numbering follows
        // first occurrence in the text
        let mut stack = vec![tree.root_node()];
        while let Some(node) = stack.pop() {
            match self.language.node_kind(node.kind()) {
                NodeKind::Comment => {
                    edits.push(Edit::drop(Span::of_node(&node)));
                    continue;
                }
                NodeKind::Identifier => {
                    let span = Span::of_node(&node);
                    if !protected.is_protected(span) {
                        if let Ok(text) = node.utf8_text(bytes) {
                            let role = classify::classify(&node, text, self.language);
                            if let Some(alias) = allocator.allocate(text, role) {
                                edits.push(Edit::replace(span, alias));
                            }
                        }
                    }
                }
                _ => {}
            }
            for i in (0..node.child_count()).rev() {
                if let Some(child) = node.child(i) {
                    stack.push(child);
                }
            }
        }

        debug!(
            language = %self.language,
            edits = edits.len(),
            protected = protected.len(),
            "edit list assembled"
        );

        let rebuilt = apply_edits(bytes, edits)?;
        let masked = whitespace::normalize(&rebuilt, mode);
        Ok(MaskOutput {
            masked,
            aliases: allocator.into_table(),
        })
    }
}

/// Mask many snippets in parallel.
///
/// Each snippet gets its own parser and allocator, so invocations share
/// no state; output order matches input order.
pub fn mask_batch<S>(
    sources: &[S],
    language: Language,
    mode: WhitespaceMode,
) -> Vec<MaskResult<MaskOutput>>
where
    S: AsRef<str> + Sync,
{
    sources
        .par_iter()
        .map(|source| Masker::new(language).mask(source.as_ref(), mode))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_success() {
        let output = Masker::new(Language::CFamily)
            .mask("", WhitespaceMode::Normalize)
            .unwrap();
        assert_eq!(output.masked, "");
        assert!(output.aliases.is_empty());
    }

    #[test]
    fn test_masks_simple_function() {
        let output = Masker::new(Language::CFamily)
            .mask("int add(int a, int b) { return a + b; }", WhitespaceMode::Normalize)
            .unwrap();
        assert_eq!(output.masked, "int FUNC_0(int VAR_0, int VAR_1) { return VAR_0 + VAR_1; }");
        assert_eq!(output.aliases.get("add"), Some("FUNC_0"));
        assert_eq!(output.aliases.get("a"), Some("VAR_0"));
        assert_eq!(output.aliases.get("b"), Some("VAR_1"));
    }

    #[test]
    fn test_batch_preserves_order() {
        let sources = ["int one;", "int two;", "int three;"];
        let outputs = mask_batch(&sources, Language::CFamily, WhitespaceMode::Normalize);
        assert_eq!(outputs.len(), 3);
        assert_eq!(outputs[0].as_ref().unwrap().masked, "int VAR_0;");
        assert!(outputs[1].as_ref().unwrap().aliases.contains("two"));
        assert!(outputs[2].as_ref().unwrap().aliases.contains("three"));
    }
}

//! Identifier role classification
//!
//! Answers "what is this identifier" from the parent chain alone. The
//! engine's contract is syntactic, so there is no symbol table: a
//! function name is whatever sits in the name slot of a declarator or
//! gets called, nothing more.

use crate::core::Span;
use crate::parser::{Language, NodeKind};
use tree_sitter::Node;

/// Role of one identifier occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierRole {
    /// Keyword, well-known builtin, or namespace name. Left untouched.
    Skip,
    /// Declared function name or call callee. Aliased as `FUNC_n`.
    Func,
    /// Everything else. Aliased as `VAR_n`.
    Var,
}

/// Classify one identifier occurrence. Pure function of the tree
/// structure and the identifier text; the same node always yields the
/// same role.
pub fn classify(node: &Node, text: &str, language: Language) -> IdentifierRole {
    if language.is_keyword(text)
        || language.is_builtin_function(text)
        || language.is_namespace(text)
    {
        return IdentifierRole::Skip;
    }
    if is_declared_function_name(node, language) || is_call_callee(node, language) {
        return IdentifierRole::Func;
    }
    IdentifierRole::Var
}

/// True if the identifier occupies the name slot of a function
/// declaration or definition.
///
/// Walks up through declarator wrappers (pointer, array, parenthesized)
/// until a function declarator, function definition, or plain declaration
/// is reached, then confirms the identifier's bytes lie within that
/// node's declared-name field. Parameters live outside the name field, so
/// they stay variables.
fn is_declared_function_name(node: &Node, language: Language) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        match language.node_kind(parent.kind()) {
            NodeKind::FunctionDeclarator | NodeKind::FunctionDefinition => {
                return match parent.child_by_field_name(language.name_field()) {
                    Some(name) => Span::of_node(&name).contains(Span::of_node(node)),
                    None => false,
                };
            }
            NodeKind::Declaration => return false,
            _ => current = parent.parent(),
        }
    }
    false
}

/// True if the identifier is the callee of a call node: the named callee
/// field equals this node, or, when the grammar exposes no such field,
/// this node is the call's first child.
fn is_call_callee(node: &Node, language: Language) -> bool {
    let parent = match node.parent() {
        Some(p) => p,
        None => return false,
    };
    if language.node_kind(parent.kind()) != NodeKind::Call {
        return false;
    }
    match parent.child_by_field_name(language.callee_field()) {
        Some(callee) => callee.id() == node.id(),
        None => parent.child(0).map(|c| c.id() == node.id()).unwrap_or(false),
    }
}

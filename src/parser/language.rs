//! Language dispatch
//!
//! Maps caller-supplied language tags to a grammar, a node-kind
//! classification table, and the keyword/builtin/namespace sets the
//! classifier consults. Adding a language touches only this module and
//! `keywords.rs`; the masking pipeline is language-agnostic.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::keywords;

/// Supported grammars. Unrecognized tags fall back to `CFamily`; the
/// engine's contract is best-effort masking, not strict validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    CFamily,
    Java,
    JavaScript,
}

impl Default for Language {
    fn default() -> Self {
        Language::CFamily
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::CFamily => write!(f, "c-family"),
            Language::Java => write!(f, "java"),
            Language::JavaScript => write!(f, "javascript"),
        }
    }
}

/// Closed classification of grammar node type strings. Keeping this a
/// single enum keeps the role-classification decision table exhaustive
/// instead of scattering string matches across the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    StringLiteral,
    TemplateString,
    TemplateSubstitution,
    Comment,
    Identifier,
    Call,
    FunctionDeclarator,
    FunctionDefinition,
    Declaration,
    Other,
}

impl Language {
    /// Resolve a caller-supplied tag. Case-insensitive; unknown tags fall
    /// back to the C-family configuration.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "c" | "cpp" | "c++" | "cc" | "cxx" | "h" | "hpp" => Language::CFamily,
            "java" => Language::Java,
            "js" | "jsx" | "mjs" | "javascript" | "ts" | "tsx" | "typescript" => {
                Language::JavaScript
            }
            _ => Language::CFamily,
        }
    }

    /// The tree-sitter grammar for this language. C and C++ both parse
    /// with the C++ grammar, which accepts plain C.
    pub fn grammar(&self) -> tree_sitter::Language {
        match self {
            Language::CFamily => tree_sitter_cpp::LANGUAGE.into(),
            Language::Java => tree_sitter_java::LANGUAGE.into(),
            Language::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
        }
    }

    /// Classify a grammar node type string.
    pub fn node_kind(&self, kind: &str) -> NodeKind {
        match self {
            Language::CFamily => match kind {
                "string_literal" | "char_literal" | "raw_string_literal"
                | "concatenated_string" => NodeKind::StringLiteral,
                "comment" => NodeKind::Comment,
                "identifier" => NodeKind::Identifier,
                "call_expression" => NodeKind::Call,
                "function_declarator" => NodeKind::FunctionDeclarator,
                "function_definition" => NodeKind::FunctionDefinition,
                "declaration" => NodeKind::Declaration,
                _ => NodeKind::Other,
            },
            Language::Java => match kind {
                "string_literal" | "character_literal" | "text_block" => NodeKind::StringLiteral,
                "line_comment" | "block_comment" | "comment" => NodeKind::Comment,
                "identifier" => NodeKind::Identifier,
                "method_invocation" => NodeKind::Call,
                "method_declaration" | "constructor_declaration" => NodeKind::FunctionDefinition,
                "local_variable_declaration" | "field_declaration" => NodeKind::Declaration,
                _ => NodeKind::Other,
            },
            Language::JavaScript => match kind {
                "string" => NodeKind::StringLiteral,
                "template_string" => NodeKind::TemplateString,
                "template_substitution" => NodeKind::TemplateSubstitution,
                "comment" => NodeKind::Comment,
                "identifier" => NodeKind::Identifier,
                "call_expression" => NodeKind::Call,
                "function_declaration" | "generator_function_declaration" | "function_expression"
                | "function" | "method_definition" => NodeKind::FunctionDefinition,
                "variable_declaration" | "lexical_declaration" => NodeKind::Declaration,
                _ => NodeKind::Other,
            },
        }
    }

    /// Field holding the declared name inside a function
    /// declarator/definition node.
    pub fn name_field(&self) -> &'static str {
        match self {
            Language::CFamily => "declarator",
            Language::Java => "name",
            Language::JavaScript => "name",
        }
    }

    /// Field holding the callee inside a call node.
    pub fn callee_field(&self) -> &'static str {
        match self {
            Language::CFamily => "function",
            Language::Java => "name",
            Language::JavaScript => "function",
        }
    }

    pub fn is_keyword(&self, text: &str) -> bool {
        match self {
            Language::CFamily => keywords::C_FAMILY_KEYWORDS.contains(text),
            Language::Java => keywords::JAVA_KEYWORDS.contains(text),
            Language::JavaScript => keywords::JS_KEYWORDS.contains(text),
        }
    }

    pub fn is_builtin_function(&self, text: &str) -> bool {
        match self {
            Language::CFamily => keywords::C_FAMILY_BUILTIN_FUNCTIONS.contains(text),
            Language::Java => keywords::JAVA_BUILTIN_FUNCTIONS.contains(text),
            Language::JavaScript => keywords::JS_BUILTIN_FUNCTIONS.contains(text),
        }
    }

    pub fn is_namespace(&self, text: &str) -> bool {
        match self {
            Language::CFamily => keywords::C_FAMILY_NAMESPACES.contains(text),
            Language::Java => keywords::JAVA_NAMESPACES.contains(text),
            Language::JavaScript => keywords::JS_NAMESPACES.contains(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_dispatch() {
        assert_eq!(Language::from_tag("cpp"), Language::CFamily);
        assert_eq!(Language::from_tag("C++"), Language::CFamily);
        assert_eq!(Language::from_tag("java"), Language::Java);
        assert_eq!(Language::from_tag("TypeScript"), Language::JavaScript);
        // best-effort fallback for tags the engine does not know
        assert_eq!(Language::from_tag("cobol"), Language::CFamily);
        assert_eq!(Language::from_tag(""), Language::CFamily);
    }

    #[test]
    fn test_node_kind_tables() {
        let c = Language::CFamily;
        assert_eq!(c.node_kind("string_literal"), NodeKind::StringLiteral);
        assert_eq!(c.node_kind("comment"), NodeKind::Comment);
        assert_eq!(c.node_kind("function_declarator"), NodeKind::FunctionDeclarator);
        assert_eq!(c.node_kind("binary_expression"), NodeKind::Other);

        let js = Language::JavaScript;
        assert_eq!(js.node_kind("template_string"), NodeKind::TemplateString);
        assert_eq!(
            js.node_kind("template_substitution"),
            NodeKind::TemplateSubstitution
        );

        let java = Language::Java;
        assert_eq!(java.node_kind("line_comment"), NodeKind::Comment);
        assert_eq!(java.node_kind("method_invocation"), NodeKind::Call);
    }

    #[test]
    fn test_keyword_lookup_per_language() {
        assert!(Language::CFamily.is_keyword("sizeof"));
        assert!(!Language::Java.is_keyword("sizeof"));
        assert!(Language::Java.is_namespace("System"));
        assert!(Language::JavaScript.is_builtin_function("require"));
    }
}
